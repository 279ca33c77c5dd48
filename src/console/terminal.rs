use super::{Console, Token, write_farewell};
use crate::config::Palette;
use crate::error::{GameError, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use std::time::{Duration, Instant};

const POLL_MS: u64 = 20;

/// Raw mode turns Ctrl-C into a key event; everywhere else (piped stdin,
/// non-interactive pauses, between prompts) it arrives as SIGINT. This routes
/// the signal to the same farewell and a clean exit.
pub fn install_interrupt_handler() -> Result<()>
{
    ctrlc::set_handler(|| {
        let _ = terminal::disable_raw_mode();
        let _ = write_farewell(&mut io::stdout());
        std::process::exit(0);
    })?;
    Ok(())
}

struct RawModeGuard;

impl RawModeGuard
{
    fn enter() -> io::Result<Self>
    {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard
{
    fn drop(&mut self)
    {
        let _ = terminal::disable_raw_mode();
    }
}

enum KeyAction
{
    Interrupt,
    Submit,
    Erase,
    Insert(char),
    Ignore,
}

fn classify(code: KeyCode, modifiers: KeyModifiers) -> KeyAction
{
    match code {
        KeyCode::Esc => KeyAction::Interrupt,
        KeyCode::Char('c') | KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Interrupt
        }
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Erase,
        KeyCode::Char(ch) => KeyAction::Insert(ch),
        _ => KeyAction::Ignore,
    }
}

/// Console on the real terminal. Uses a raw-mode line editor when stdin is a
/// TTY so Ctrl-C reaches the game as [`GameError::Interrupted`]; falls back to
/// plain buffered reads for piped input.
pub struct TerminalConsole
{
    stdout: Stdout,
    palette: Palette,
    interactive: bool,
}

impl TerminalConsole
{
    pub fn new(palette: Palette) -> Self
    {
        Self {
            stdout: io::stdout(),
            palette,
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_raw_line(&mut self) -> Result<String>
    {
        let mut buffer = String::new();
        {
            let _guard = RawModeGuard::enter()?;
            loop {
                let Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind,
                    ..
                }) = event::read()?
                else {
                    continue;
                };
                if kind == KeyEventKind::Release {
                    continue;
                }
                match classify(code, modifiers) {
                    KeyAction::Interrupt => return Err(GameError::Interrupted),
                    KeyAction::Submit => break,
                    KeyAction::Erase => {
                        if buffer.pop().is_some() {
                            execute!(self.stdout, Print("\u{8} \u{8}"))?;
                        }
                    }
                    KeyAction::Insert(ch) => {
                        buffer.push(ch);
                        execute!(self.stdout, Print(ch))?;
                    }
                    KeyAction::Ignore => {}
                }
            }
        }
        writeln!(self.stdout)?;
        Ok(buffer)
    }

    fn read_buffered_line(&mut self) -> Result<String>
    {
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(GameError::Interrupted);
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Console for TerminalConsole
{
    fn read_line(&mut self, prompt: &str) -> Result<String>
    {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;
        if self.interactive {
            self.read_raw_line()
        } else {
            self.read_buffered_line()
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()>
    {
        writeln!(self.stdout, "{line}")?;
        Ok(())
    }

    fn write_tokens(&mut self, tokens: &[Token]) -> Result<()>
    {
        for token in tokens {
            match token.tint {
                Some(tint) => queue!(
                    self.stdout,
                    SetForegroundColor(self.palette.color(tint)),
                    Print(&token.text),
                    ResetColor
                )?,
                None => queue!(self.stdout, Print(&token.text))?,
            }
        }
        queue!(self.stdout, Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()>
    {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Result<()>
    {
        if !self.interactive {
            std::thread::sleep(duration);
            return Ok(());
        }

        let _guard = RawModeGuard::enter()?;
        let deadline = Instant::now() + duration;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(());
            }
            if event::poll(left.min(Duration::from_millis(POLL_MS)))? {
                if let Event::Key(KeyEvent {
                    code, modifiers, ..
                }) = event::read()?
                {
                    if let KeyAction::Interrupt = classify(code, modifiers) {
                        return Err(GameError::Interrupted);
                    }
                }
            }
        }
    }
}
