pub mod hangman;
pub mod one_word;
pub mod quiz;
pub mod wordle;

use crate::config::GameConfig;
use crate::console::Console;
use crate::dialect::{LabelScore, Scores};
use crate::error::Result;
use crate::store::{DEFAULT_TOP, FeedbackLog, Leaderboard};
use rand::rngs::StdRng;

const KEYWORD_PREVIEW: usize = 15;

/// State shared by every mode for one run of the program.
pub struct Session<'a>
{
    pub config: &'a GameConfig,
    pub console: &'a mut dyn Console,
    pub rng: StdRng,
    pub leaderboard: Leaderboard,
    pub feedback: FeedbackLog,
}

impl<'a> Session<'a>
{
    pub fn new(config: &'a GameConfig, console: &'a mut dyn Console, rng: StdRng) -> Self
    {
        Self {
            config,
            console,
            rng,
            leaderboard: Leaderboard::new(config.leaderboard_path.clone()),
            feedback: FeedbackLog::new(config.feedback_path.clone()),
        }
    }

    pub fn say(&mut self, line: &str) -> Result<()>
    {
        self.console.write_line(line)
    }

    pub fn banner(&mut self, title: &str) -> Result<()>
    {
        let width = 28;
        self.say("")?;
        self.say(&format!("╔{}╗", "═".repeat(width)))?;
        self.say(&format!("║{:^width$}║", title))?;
        self.say(&format!("╚{}╝", "═".repeat(width)))
    }

    pub fn show_leaderboard(&mut self) -> Result<()>
    {
        self.say("")?;
        self.say("=== LEADERBOARD ===")?;
        for line in self.leaderboard.render(DEFAULT_TOP)? {
            self.say(&line)?;
        }
        Ok(())
    }

    /// Asks for a name and records the result when one is given.
    pub fn offer_leaderboard(&mut self, score: i64, rounds: u32, show: bool) -> Result<bool>
    {
        let name = self
            .console
            .read_line("Enter a name for the leaderboard (enter to skip): ")?;
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        self.leaderboard.append(name, score, rounds)?;
        if show {
            self.show_leaderboard()?;
        }
        Ok(true)
    }

    pub fn show_scores(&mut self, scores: &Scores) -> Result<()>
    {
        self.say(&format!("Scores: {scores}"))
    }

    /// Lists the distinct keywords that fired, per label.
    pub fn show_matches(&mut self, scores: &Scores) -> Result<()>
    {
        let lines: Vec<String> = scores
            .iter()
            .filter(|entry| !entry.matches.is_empty())
            .map(format_matches)
            .collect();
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }
}

fn format_matches(entry: &LabelScore) -> String
{
    format!("  - {}: [{}]", entry.label, entry.distinct_keywords().join(", "))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow
{
    Continue,
    Exit,
}

pub type Handler = fn(&mut Session<'_>) -> Result<Flow>;

pub struct GameDescriptor
{
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![
        GameDescriptor {
            key: "1",
            name: "quiz",
            description: "Quiz: guess the dialect of sample sentences",
            handler: play_quiz,
        },
        GameDescriptor {
            key: "2",
            name: "keywords",
            description: "Show keywords per dialect",
            handler: list_keywords,
        },
        GameDescriptor {
            key: "3",
            name: "leaderboard",
            description: "Show the leaderboard",
            handler: leaderboard,
        },
        GameDescriptor {
            key: "4",
            name: "word",
            description: "Minigame: guess the dialect of one word",
            handler: play_one_word,
        },
        GameDescriptor {
            key: "5",
            name: "hangman",
            description: "Hangman with dialect words",
            handler: play_hangman,
        },
        GameDescriptor {
            key: "6",
            name: "wordle",
            description: "Dialect wordle",
            handler: play_wordle,
        },
        GameDescriptor {
            key: "7",
            name: "exit",
            description: "Quit",
            handler: exit,
        },
    ]
}

pub fn find<'r>(registry: &'r [GameDescriptor], choice: &str) -> Option<&'r GameDescriptor>
{
    registry
        .iter()
        .find(|game| game.key == choice || game.name == choice)
}

/// Main loop: show the menu, dispatch, repeat until a handler asks to exit.
pub fn run_menu(session: &mut Session<'_>) -> Result<()>
{
    let registry = registry();
    loop {
        session.say("====================================")?;
        session.say("  JATIM DIALECT DETECTIVE - terminal")?;
        session.say("  (rule-based dialect classifier)")?;
        session.say("====================================")?;
        session.say("")?;
        session.say("Choose a mode:")?;
        for game in &registry {
            session.say(&format!("{}. {}", game.key, game.description))?;
        }
        let choice = session
            .console
            .ask(&format!("Choice [1-{}]: ", registry.len()))?;

        match find(&registry, &choice) {
            Some(game) => {
                log::debug!("menu choice '{}' -> {}", choice, game.name);
                if (game.handler)(session)? == Flow::Exit {
                    return Ok(());
                }
            }
            None => session.say("Invalid choice.")?,
        }
    }
}

fn play_quiz(session: &mut Session<'_>) -> Result<Flow>
{
    quiz::run(session)?;
    Ok(Flow::Continue)
}

fn play_one_word(session: &mut Session<'_>) -> Result<Flow>
{
    one_word::run(session)?;
    Ok(Flow::Continue)
}

fn play_hangman(session: &mut Session<'_>) -> Result<Flow>
{
    hangman::run(session)?;
    Ok(Flow::Continue)
}

fn play_wordle(session: &mut Session<'_>) -> Result<Flow>
{
    wordle::run(session)?;
    Ok(Flow::Continue)
}

fn leaderboard(session: &mut Session<'_>) -> Result<Flow>
{
    session.show_leaderboard()?;
    Ok(Flow::Continue)
}

fn list_keywords(session: &mut Session<'_>) -> Result<Flow>
{
    let lines: Vec<String> = session
        .config
        .table
        .entries()
        .iter()
        .map(|entry| {
            let shown: Vec<&str> = entry
                .keywords()
                .iter()
                .take(KEYWORD_PREVIEW)
                .map(String::as_str)
                .collect();
            let more = if entry.keywords().len() > KEYWORD_PREVIEW { "..." } else { "" };
            format!("- {}: {}{}", entry.label(), shown.join(", "), more)
        })
        .collect();

    session.say("")?;
    session.say("=== KEYWORDS PER DIALECT (sample) ===")?;
    for line in lines {
        session.say(&line)?;
    }
    Ok(Flow::Continue)
}

fn exit(session: &mut Session<'_>) -> Result<Flow>
{
    session.say("See you!")?;
    Ok(Flow::Exit)
}
