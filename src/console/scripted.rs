use super::{Console, Token};
use crate::error::{GameError, Result};
use std::collections::VecDeque;
use std::time::Duration;

/// Console fed from a list of answers; records everything it is asked to show.
/// Running out of answers behaves like the player hitting Ctrl-C.
#[derive(Default)]
pub struct ScriptedConsole
{
    answers: VecDeque<String>,
    lines: Vec<String>,
    frames: usize,
}

impl ScriptedConsole
{
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
            frames: 0,
        }
    }

    pub fn lines(&self) -> &[String]
    {
        &self.lines
    }

    pub fn transcript(&self) -> String
    {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool
    {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_answers(&self) -> usize
    {
        self.answers.len()
    }

    pub fn frames_cleared(&self) -> usize
    {
        self.frames
    }
}

impl Console for ScriptedConsole
{
    fn read_line(&mut self, prompt: &str) -> Result<String>
    {
        let answer = self.answers.pop_front().ok_or(GameError::Interrupted)?;
        self.lines.push(format!("{prompt}{answer}"));
        Ok(answer)
    }

    fn write_line(&mut self, line: &str) -> Result<()>
    {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn write_tokens(&mut self, tokens: &[Token]) -> Result<()>
    {
        let line: String = tokens.iter().map(|token| token.text.as_str()).collect();
        self.lines.push(line);
        Ok(())
    }

    fn clear(&mut self) -> Result<()>
    {
        self.frames += 1;
        Ok(())
    }

    fn pause(&mut self, _duration: Duration) -> Result<()>
    {
        Ok(())
    }
}
