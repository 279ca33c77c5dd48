use crate::dialect::KeywordTable;
use crate::dialect::keywords::QUIZ_SAMPLES;
use crossterm::style::Color;
use std::path::{Path, PathBuf};
use std::time::Duration;

const LEADERBOARD_FILE: &str = "leaderboard.txt";
const FEEDBACK_FILE: &str = "feedback.txt";
const SPLASH_CYCLES: usize = 38;
const SPLASH_FRAME_MS: u64 = 50;
const SPLASH_HOLD_MS: u64 = 800;

/// Symbolic colors; renderers decide what they look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint
{
    Rainbow(usize),
    Correct,
    Present,
    Absent,
}

#[derive(Clone, Debug)]
pub struct Palette
{
    pub rainbow: Vec<Color>,
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
}

impl Palette
{
    pub fn color(&self, tint: Tint) -> Color
    {
        match tint {
            Tint::Rainbow(idx) => {
                if self.rainbow.is_empty() {
                    Color::Reset
                } else {
                    self.rainbow[idx % self.rainbow.len()]
                }
            }
            Tint::Correct => self.correct,
            Tint::Present => self.present,
            Tint::Absent => self.absent,
        }
    }
}

impl Default for Palette
{
    fn default() -> Self
    {
        Self {
            rainbow: vec![
                Color::AnsiValue(196),
                Color::AnsiValue(208),
                Color::AnsiValue(226),
                Color::AnsiValue(46),
                Color::AnsiValue(51),
                Color::AnsiValue(27),
                Color::AnsiValue(129),
            ],
            correct: Color::AnsiValue(40),
            present: Color::AnsiValue(214),
            absent: Color::AnsiValue(240),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SplashTiming
{
    pub cycles: usize,
    pub frame: Duration,
    pub hold: Duration,
}

#[derive(Clone, Debug)]
pub struct Sample
{
    pub text: String,
    pub label: String,
}

/// Everything a session needs, built once and shared by reference.
#[derive(Clone, Debug)]
pub struct GameConfig
{
    pub table: KeywordTable,
    pub samples: Vec<Sample>,
    pub leaderboard_path: PathBuf,
    pub feedback_path: PathBuf,
    pub palette: Palette,
    pub splash: SplashTiming,
}

impl GameConfig
{
    pub fn with_table(mut self, table: KeywordTable) -> Self
    {
        self.table = table;
        self
    }

    pub fn with_samples(mut self, samples: &[(&str, &str)]) -> Self
    {
        self.samples = samples
            .iter()
            .map(|(text, label)| Sample {
                text: text.to_string(),
                label: label.to_string(),
            })
            .collect();
        self
    }

    /// Puts both data files inside `dir`, keeping their file names.
    pub fn with_data_dir(mut self, dir: &Path) -> Self
    {
        self.leaderboard_path = dir.join(LEADERBOARD_FILE);
        self.feedback_path = dir.join(FEEDBACK_FILE);
        self
    }

    pub fn with_splash(mut self, splash: SplashTiming) -> Self
    {
        self.splash = splash;
        self
    }

    /// Dialect choices offered to the player: every table label, then the fallback.
    pub fn dialect_choices(&self) -> Vec<&str>
    {
        let mut choices: Vec<&str> = self.table.labels().collect();
        choices.push(self.table.fallback());
        choices
    }

    pub fn choices_hint(&self) -> String
    {
        self.dialect_choices().join("/")
    }
}

impl Default for GameConfig
{
    fn default() -> Self
    {
        Self {
            table: KeywordTable::builtin(),
            samples: Vec::new(),
            leaderboard_path: PathBuf::from(LEADERBOARD_FILE),
            feedback_path: PathBuf::from(FEEDBACK_FILE),
            palette: Palette::default(),
            splash: SplashTiming {
                cycles: SPLASH_CYCLES,
                frame: Duration::from_millis(SPLASH_FRAME_MS),
                hold: Duration::from_millis(SPLASH_HOLD_MS),
            },
        }
        .with_samples(QUIZ_SAMPLES)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn choices_end_with_fallback()
    {
        let config = GameConfig::default();
        assert_eq!(
            config.dialect_choices(),
            vec!["suroboyoan", "mataraman", "madura", "lainnya"]
        );
        assert_eq!(config.choices_hint(), "suroboyoan/mataraman/madura/lainnya");
    }

    #[test]
    fn rainbow_tint_wraps_around()
    {
        let palette = Palette::default();
        assert_eq!(palette.color(Tint::Rainbow(7)), palette.color(Tint::Rainbow(0)));
    }

    #[test]
    fn data_dir_moves_both_files()
    {
        let config = GameConfig::default().with_data_dir(Path::new("/tmp/x"));
        assert_eq!(config.leaderboard_path, Path::new("/tmp/x/leaderboard.txt"));
        assert_eq!(config.feedback_path, Path::new("/tmp/x/feedback.txt"));
    }
}
