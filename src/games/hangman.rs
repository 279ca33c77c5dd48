use super::Session;
use crate::dialect::{bare_word, predict};
use crate::error::Result;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

pub const STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

pub const MAX_ERRORS: usize = STAGES.len() - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HangmanState
{
    Guessing,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome
{
    Empty,
    Repeated(char),
    Hit(char),
    Miss(char),
    WordHit,
    WordMiss,
    Finished,
}

pub struct Hangman
{
    secret: Vec<char>,
    revealed: Vec<bool>,
    errors: usize,
    used: BTreeSet<char>,
}

impl Hangman
{
    pub fn new(secret: &str) -> Self
    {
        let secret: Vec<char> = secret.chars().collect();
        Self {
            revealed: vec![false; secret.len()],
            secret,
            errors: 0,
            used: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> HangmanState
    {
        if self.revealed.iter().all(|shown| *shown) {
            HangmanState::Won
        } else if self.errors >= MAX_ERRORS {
            HangmanState::Lost
        } else {
            HangmanState::Guessing
        }
    }

    pub fn errors(&self) -> usize
    {
        self.errors
    }

    pub fn stage(&self) -> &'static str
    {
        STAGES[self.errors.min(MAX_ERRORS)]
    }

    pub fn secret(&self) -> String
    {
        self.secret.iter().collect()
    }

    /// Blanks as `_`, letters found so far in place, space separated.
    pub fn masked(&self) -> String
    {
        self.secret
            .iter()
            .zip(&self.revealed)
            .map(|(ch, shown)| if *shown { ch.to_string() } else { "_".to_string() })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn used_letters(&self) -> String
    {
        self.used
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One letter guesses a letter, anything longer guesses the whole word.
    pub fn guess(&mut self, input: &str) -> GuessOutcome
    {
        if self.state() != HangmanState::Guessing {
            return GuessOutcome::Finished;
        }
        let input = input.trim().to_lowercase();
        let mut chars = input.chars();
        let Some(letter) = chars.next() else {
            return GuessOutcome::Empty;
        };

        if chars.next().is_some() {
            if input.chars().eq(self.secret.iter().copied()) {
                self.revealed.fill(true);
                return GuessOutcome::WordHit;
            }
            self.errors += 1;
            return GuessOutcome::WordMiss;
        }

        if !self.used.insert(letter) {
            return GuessOutcome::Repeated(letter);
        }
        let mut hit = false;
        for (ch, shown) in self.secret.iter().zip(self.revealed.iter_mut()) {
            if *ch == letter {
                *shown = true;
                hit = true;
            }
        }
        if hit {
            GuessOutcome::Hit(letter)
        } else {
            self.errors += 1;
            GuessOutcome::Miss(letter)
        }
    }
}

/// Every keyword in the table as a bare word, paired with its dialect.
pub fn word_pool(session: &Session<'_>) -> Vec<(String, String)>
{
    session
        .config
        .table
        .entries()
        .iter()
        .flat_map(|entry| {
            entry
                .keywords()
                .iter()
                .map(|keyword| (bare_word(keyword), entry.label().to_string()))
        })
        .filter(|(word, _)| !word.is_empty())
        .collect()
}

fn draw(session: &mut Session<'_>, game: &Hangman, with_used: bool) -> Result<()>
{
    session.say(game.stage())?;
    session.say(&game.masked())?;
    if with_used {
        session.say(&format!("Used: {}", game.used_letters()))?;
    }
    Ok(())
}

pub fn run(session: &mut Session<'_>) -> Result<()>
{
    session.banner("JATIM HANGMAN")?;
    let pool = word_pool(session);
    let Some((secret, dialect)) = pool.choose(&mut session.rng).cloned() else {
        session.say("No words available for hangman.")?;
        return Ok(());
    };

    let mut game = Hangman::new(&secret);
    session.say(&format!(
        "Guess a letter, or type the whole word if you are sure. You can make {MAX_ERRORS} mistakes."
    ))?;
    draw(session, &game, false)?;

    while game.state() == HangmanState::Guessing {
        let input = session.console.ask("Enter a letter or guess the word: ")?;
        match game.guess(&input) {
            GuessOutcome::Empty => {
                session.say("Please type something.")?;
                continue;
            }
            GuessOutcome::Repeated(_) => {
                session.say("You already tried that letter.")?;
                continue;
            }
            GuessOutcome::Hit(_) => session.say("Correct!")?,
            GuessOutcome::Miss(letter) => session.say(&format!("No letter '{letter}'."))?,
            GuessOutcome::WordHit => session.say("Correct word guess!")?,
            GuessOutcome::WordMiss => session.say("Wrong word guess.")?,
            GuessOutcome::Finished => break,
        }
        draw(session, &game, true)?;
    }

    if game.state() == HangmanState::Won {
        session.say("")?;
        session.say("CONGRATS - YOU WIN!")?;
        session.say(&format!("Word: {}  (dialect: {dialect})", game.secret()))?;
        let prediction = predict(&game.secret(), &session.config.table);
        session.say(&format!(
            "Model prediction (word): {} | Scores: {}",
            prediction.label, prediction.scores
        ))?;
    } else {
        session.say("")?;
        session.say("GAME OVER - you ran out of lives.")?;
        session.say(&format!(
            "The word was: {}  (dialect: {dialect})",
            game.secret()
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn repeated_letter_has_no_side_effect()
    {
        let mut game = Hangman::new("cak");
        assert_eq!(game.guess("z"), GuessOutcome::Miss('z'));
        assert_eq!(game.guess("z"), GuessOutcome::Repeated('z'));
        assert_eq!(game.errors(), 1);
        assert_eq!(game.guess("c"), GuessOutcome::Hit('c'));
        assert_eq!(game.guess("C"), GuessOutcome::Repeated('c'));
        assert_eq!(game.masked(), "c _ _");
    }

    #[test]
    fn hit_reveals_every_occurrence()
    {
        let mut game = Hangman::new("mangan");
        game.guess("n");
        assert_eq!(game.masked(), "_ _ n _ _ n");
        game.guess("a");
        assert_eq!(game.masked(), "_ a n _ a n");
        assert_eq!(game.used_letters(), "a n");
    }

    #[test]
    fn empty_input_is_rejected()
    {
        let mut game = Hangman::new("rek");
        assert_eq!(game.guess("   "), GuessOutcome::Empty);
        assert_eq!(game.errors(), 0);
        assert_eq!(game.state(), HangmanState::Guessing);
    }

    #[test]
    fn whole_word_guess_wins_at_once()
    {
        let mut game = Hangman::new("ndeso");
        game.guess("x");
        assert_eq!(game.guess("NDESO"), GuessOutcome::WordHit);
        assert_eq!(game.state(), HangmanState::Won);
        assert_eq!(game.masked(), "n d e s o");
        assert_eq!(game.errors(), 1);
    }

    #[test]
    fn wrong_words_and_letters_hang_the_player()
    {
        let mut game = Hangman::new("rek");
        assert_eq!(game.guess("cak"), GuessOutcome::WordMiss);
        assert_eq!(game.stage(), STAGES[1]);
        for letter in ["a", "b", "c", "d", "f"] {
            game.guess(letter);
        }
        assert_eq!(game.errors(), MAX_ERRORS);
        assert_eq!(game.state(), HangmanState::Lost);
        assert_eq!(game.stage(), STAGES[MAX_ERRORS]);
        assert_eq!(game.guess("r"), GuessOutcome::Finished);
    }
}
