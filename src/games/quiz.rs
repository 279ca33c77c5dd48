use super::Session;
use crate::config::Sample;
use crate::dialect::predict;
use crate::error::Result;
use rand::seq::SliceRandom;

pub const DEFAULT_ROUNDS: u32 = 5;

/// Empty answer means the default; anything else must be a positive number.
fn parse_rounds(answer: &str) -> Option<u32>
{
    if answer.is_empty() {
        return Some(DEFAULT_ROUNDS);
    }
    match answer.parse::<u32>() {
        Ok(rounds) if rounds > 0 => Some(rounds),
        _ => None,
    }
}

fn cap_rounds(rounds: u32, available: usize) -> u32
{
    rounds.min(u32::try_from(available).unwrap_or(u32::MAX))
}

fn ask_rounds(session: &mut Session<'_>, available: usize) -> Result<u32>
{
    loop {
        let answer = session.console.ask(&format!(
            "How many rounds? (max {available}, default {DEFAULT_ROUNDS}): "
        ))?;
        match parse_rounds(&answer) {
            Some(rounds) => return Ok(cap_rounds(rounds, available)),
            None => session.say("Please enter a positive number.")?,
        }
    }
}

/// Plays one sentence; returns 1 when the player named the right dialect.
fn play_round(session: &mut Session<'_>, sample: &Sample) -> Result<u32>
{
    let config = session.config;
    session.say("")?;
    session.say("------------------------------")?;
    session.say("Sentence:")?;
    session.say(&format!("  \"{}\"", sample.text))?;
    let guess = session
        .console
        .ask(&format!("Your guess ({}): ", config.choices_hint()))?;

    let prediction = predict(&sample.text, &config.table);
    session.say("")?;
    session.say(&format!("Model answer: {}", prediction.label))?;
    session.show_scores(&prediction.scores)?;
    session.say("Dialect keywords detected:")?;
    session.show_matches(&prediction.scores)?;

    let correct = guess == sample.label;
    if correct {
        session.say("✔ Your guess is correct!")?;
    } else {
        session.say(&format!("✘ Wrong guess. The right answer: {}", sample.label))?;
    }
    if prediction.label == sample.label {
        session.say("Model: the prediction for this sentence is right.")?;
    } else {
        session.say("Model: the prediction for this sentence is wrong.")?;
    }
    Ok(u32::from(correct))
}

fn offer_feedback(session: &mut Session<'_>) -> Result<()>
{
    let config = session.config;
    let answer = session
        .console
        .ask("Want to leave feedback on the model's answers? (y/n): ")?;
    if answer != "y" {
        return Ok(());
    }
    let text = session.console.read_line("Type the sentence: ")?;
    let label = session
        .console
        .ask(&format!("Type the right label ({}): ", config.choices_hint()))?;
    session.feedback.append(text.trim(), &label)?;
    session.say("Thanks, feedback saved.")
}

pub fn run(session: &mut Session<'_>) -> Result<()>
{
    let config = session.config;
    let mut samples: Vec<&Sample> = config.samples.iter().collect();
    session.say("")?;
    session.say("=== QUIZ MODE ===")?;
    if samples.is_empty() {
        session.say("No quiz sentences configured.")?;
        return Ok(());
    }
    samples.shuffle(&mut session.rng);

    let rounds = ask_rounds(session, samples.len())?;
    let played = usize::try_from(rounds).unwrap_or(usize::MAX);
    let mut score = 0u32;
    for (idx, sample) in samples.iter().take(played).enumerate() {
        session.say("")?;
        session.say(&format!("Round {}/{}", idx + 1, rounds))?;
        score += play_round(session, sample)?;
    }

    session.say("")?;
    session.say(&format!("Final score: {score}/{rounds}"))?;
    session.offer_leaderboard(i64::from(score), rounds, true)?;
    offer_feedback(session)
}
