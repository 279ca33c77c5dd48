use super::Session;
use crate::config::Tint;
use crate::console::Token;
use crate::dialect::bare_word;
use crate::error::Result;
use rand::seq::SliceRandom;

pub const MIN_LEN: usize = 3;
pub const MAX_LEN: usize = 7;
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterStatus
{
    Correct,
    Present,
    Absent,
}

impl LetterStatus
{
    pub fn emoji(self) -> char
    {
        match self {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬛',
        }
    }

    fn tint(self) -> Tint
    {
        match self {
            LetterStatus::Correct => Tint::Correct,
            LetterStatus::Present => Tint::Present,
            LetterStatus::Absent => Tint::Absent,
        }
    }
}

/// Per-position statuses for `guess` against `target`. Both must have the
/// same number of letters; callers re-prompt on a mismatch.
///
/// Exact hits are settled first and consume their target letter, so a
/// repeated guess letter is credited at most once per target occurrence.
pub fn feedback(guess: &str, target: &str) -> Vec<LetterStatus>
{
    let guess: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();
    debug_assert_eq!(guess.len(), remaining.len());

    let mut statuses = vec![LetterStatus::Absent; guess.len()];
    for (idx, ch) in guess.iter().enumerate() {
        if remaining.get(idx) == Some(&Some(*ch)) {
            statuses[idx] = LetterStatus::Correct;
            remaining[idx] = None;
        }
    }

    for (idx, ch) in guess.iter().enumerate() {
        if statuses[idx] == LetterStatus::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(*ch)) {
            *slot = None;
            statuses[idx] = LetterStatus::Present;
        }
    }

    statuses
}

pub fn is_win(statuses: &[LetterStatus]) -> bool
{
    statuses.iter().all(|status| *status == LetterStatus::Correct)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState
{
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission
{
    WrongLength { expected: usize },
    Scored(Vec<LetterStatus>),
    Finished,
}

#[derive(Clone, Debug)]
pub struct Attempt
{
    pub guess: String,
    pub statuses: Vec<LetterStatus>,
}

pub struct WordleRound
{
    target: String,
    attempts_left: usize,
    history: Vec<Attempt>,
    won: bool,
}

impl WordleRound
{
    /// `None` unless the normalized target has 3 to 7 letters.
    pub fn new(target: &str) -> Option<Self>
    {
        let target = bare_word(target);
        let len = target.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return None;
        }
        Some(Self {
            target,
            attempts_left: MAX_ATTEMPTS,
            history: Vec::new(),
            won: false,
        })
    }

    pub fn target(&self) -> &str
    {
        &self.target
    }

    pub fn word_len(&self) -> usize
    {
        self.target.chars().count()
    }

    pub fn attempts_left(&self) -> usize
    {
        self.attempts_left
    }

    pub fn history(&self) -> &[Attempt]
    {
        &self.history
    }

    pub fn state(&self) -> RoundState
    {
        if self.won {
            RoundState::Won
        } else if self.attempts_left == 0 {
            RoundState::Lost
        } else {
            RoundState::Playing
        }
    }

    pub fn submit(&mut self, raw_guess: &str) -> Submission
    {
        if self.state() != RoundState::Playing {
            return Submission::Finished;
        }
        let guess = bare_word(raw_guess);
        if guess.chars().count() != self.word_len() {
            return Submission::WrongLength {
                expected: self.word_len(),
            };
        }

        let statuses = feedback(&guess, &self.target);
        if is_win(&statuses) {
            self.won = true;
        } else {
            self.attempts_left -= 1;
        }
        self.history.push(Attempt {
            guess,
            statuses: statuses.clone(),
        });
        Submission::Scored(statuses)
    }
}

fn render_attempt(attempt: &Attempt) -> Vec<Token>
{
    let mut row: Vec<Token> = attempt
        .guess
        .chars()
        .zip(attempt.statuses.iter())
        .map(|(ch, status)| Token::tinted(format!("{ch} "), status.tint()))
        .collect();
    let emoji: String = attempt.statuses.iter().map(|status| status.emoji()).collect();
    row.push(Token::plain(format!("   {emoji}")));
    row
}

fn capitalize(word: &str) -> String
{
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn choose_dialect<'c>(session: &mut Session<'_>, choices: &[&'c str]) -> Result<&'c str>
{
    session.console.clear()?;
    session.say("Choose a dialect:")?;
    for (idx, dialect) in choices.iter().enumerate() {
        session.say(&format!("{}. {}", idx + 1, capitalize(dialect)))?;
    }
    loop {
        let answer = session.console.ask("\nYour choice: ")?;
        match answer.parse::<usize>() {
            Ok(pick) if (1..=choices.len()).contains(&pick) => return Ok(choices[pick - 1]),
            Ok(_) => session.say("Invalid choice.")?,
            Err(_) => session.say("Enter a number.")?,
        }
    }
}

fn pick_round(session: &mut Session<'_>, dialect: &str) -> Result<Option<WordleRound>>
{
    let config = session.config;
    if dialect == config.table.fallback() {
        session.say("")?;
        session.say(&format!(
            "You picked '{dialect}'. You will type the target word yourself."
        ))?;
        let target = session
            .console
            .read_line(&format!("Enter the target word ({MIN_LEN}-{MAX_LEN} letters): "))?;
        let round = WordleRound::new(&target);
        if round.is_none() {
            session.say("Invalid word length.")?;
        }
        return Ok(round);
    }

    let words: Vec<String> = config
        .table
        .keywords_for(dialect)
        .unwrap_or_default()
        .iter()
        .map(|keyword| bare_word(keyword))
        .filter(|word| (MIN_LEN..=MAX_LEN).contains(&word.chars().count()))
        .collect();
    match words.choose(&mut session.rng) {
        Some(word) => Ok(WordleRound::new(word)),
        None => {
            session.say(&format!(
                "This dialect has no {MIN_LEN}-{MAX_LEN} letter words yet. Pick another dialect."
            ))?;
            Ok(None)
        }
    }
}

pub fn run(session: &mut Session<'_>) -> Result<()>
{
    session.banner("DIALECT WORDLE")?;
    let config = session.config;
    let choices = config.dialect_choices();
    let dialect = choose_dialect(session, &choices)?;
    let Some(mut round) = pick_round(session, dialect)? else {
        return Ok(());
    };

    session.say("")?;
    session.say(&format!(
        "Dialect wordle - {}. Guess the {}-letter word. You have {} attempts.",
        capitalize(dialect),
        round.word_len(),
        round.attempts_left()
    ))?;

    while round.state() == RoundState::Playing {
        let guess = session
            .console
            .ask(&format!("[{} attempts] Guess: ", round.attempts_left()))?;
        match round.submit(&guess) {
            Submission::WrongLength { expected } => {
                session.say(&format!("The word must have {expected} letters."))?;
            }
            Submission::Scored(_) => {
                if let Some(attempt) = round.history().last() {
                    session.console.write_tokens(&render_attempt(attempt))?;
                }
            }
            Submission::Finished => break,
        }
    }

    if round.state() == RoundState::Won {
        session.say("")?;
        session.say("🎉 Correct! You guessed it.")?;
        session.offer_leaderboard(1, 1, false)?;
    } else {
        session.say("")?;
        session.say(&format!("❌ Out of attempts! The word was: {}", round.target()))?;
    }
    Ok(())
}
