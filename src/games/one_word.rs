use super::Session;
use crate::dialect::{normalize, predict};
use crate::error::Result;
use rand::Rng;
use rand::seq::SliceRandom;

pub fn run(session: &mut Session<'_>) -> Result<()>
{
    let config = session.config;
    session.banner("MINIGAME: ONE-WORD DIALECT")?;

    let Some(entry) = config.table.entries().choose(&mut session.rng) else {
        return Ok(());
    };
    let Some(word) = entry.keywords().choose(&mut session.rng) else {
        session.say("This dialect has no words yet.")?;
        return Ok(());
    };
    let dialect = entry.label();

    session.say("")?;
    session.say("Guess the dialect of this word:")?;
    session.say(&format!("  \"{word}\""))?;

    if session.console.ask("Need a hint? (y/n): ")? == "y" {
        let letters: Vec<char> = normalize(word).chars().filter(|ch| *ch != '\'').collect();
        if !letters.is_empty() {
            let reveal = letters[session.rng.gen_range(0..letters.len())];
            session.say(&format!(
                "Hint: length (without apostrophes) = {}, one of the letters: '{reveal}'",
                letters.len()
            ))?;
        }
    }

    let guess = session
        .console
        .ask(&format!("Your guess ({}): ", config.choices_hint()))?;
    let prediction = predict(word, &config.table);
    session.say("")?;
    session.say(&format!("Right answer: {dialect}"))?;
    session.say(&format!("Model prediction (word only): {}", prediction.label))?;
    session.show_scores(&prediction.scores)?;

    if guess == dialect {
        session.say("✔ Your guess is correct!")?;
        session.offer_leaderboard(1, 1, true)?;
    } else {
        session.say("✘ Wrong guess.")?;
    }
    session.say("Keywords that influenced the model:")?;
    session.show_matches(&prediction.scores)
}
