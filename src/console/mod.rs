mod scripted;
mod terminal;

pub use scripted::ScriptedConsole;
pub use terminal::{TerminalConsole, install_interrupt_handler};

use crate::config::Tint;
use crate::error::Result;
use std::io::{self, Write};
use std::time::Duration;

pub const FAREWELL: &str = "Exiting. See you!";

/// Blank line, then [`FAREWELL`]. Shared by every way the player can quit
/// with Ctrl-C.
pub fn write_farewell(out: &mut impl Write) -> io::Result<()>
{
    writeln!(out)?;
    writeln!(out, "{FAREWELL}")?;
    out.flush()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token
{
    pub text: String,
    pub tint: Option<Tint>,
}

impl Token
{
    pub fn plain(text: impl Into<String>) -> Self
    {
        Self {
            text: text.into(),
            tint: None,
        }
    }

    pub fn tinted(text: impl Into<String>, tint: Tint) -> Self
    {
        Self {
            text: text.into(),
            tint: Some(tint),
        }
    }
}

/// Everything the game modes need from a screen and a keyboard.
///
/// Game logic only talks to this trait, so every mode can be driven by
/// [`ScriptedConsole`] in tests.
pub trait Console
{
    /// Shows `prompt` and returns the line typed, without the line break.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Writes the tokens on a single line.
    fn write_tokens(&mut self, tokens: &[Token]) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    fn pause(&mut self, duration: Duration) -> Result<()>;

    /// Replaces the screen with `rows`.
    fn render_frame(&mut self, rows: &[Vec<Token>]) -> Result<()>
    {
        self.clear()?;
        for row in rows {
            self.write_tokens(row)?;
        }
        Ok(())
    }

    /// Trimmed, lowercased answer for matching against expected tokens.
    fn ask(&mut self, prompt: &str) -> Result<String>
    {
        Ok(self.read_line(prompt)?.trim().to_lowercase())
    }
}
