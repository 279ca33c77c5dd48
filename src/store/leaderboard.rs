use super::{append_line, now_timestamp, sanitize_field};
use crate::error::Result;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry
{
    pub timestamp: String,
    pub name: String,
    pub score: i64,
    pub rounds: u32,
}

impl LeaderboardEntry
{
    fn to_line(&self) -> String
    {
        format!(
            "{},{},{},{}",
            self.timestamp,
            sanitize_field(&self.name, ','),
            self.score,
            self.rounds
        )
    }

    /// `None` for blank lines or lines with fewer than four fields.
    fn parse(line: &str) -> Option<Self>
    {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 4 {
            debug!("skipping malformed leaderboard line {line:?}");
            return None;
        }
        Some(Self {
            timestamp: parts[0].to_string(),
            name: parts[1].to_string(),
            score: parts[2].trim().parse().unwrap_or(0),
            rounds: parts[3].trim().parse().unwrap_or(0),
        })
    }
}

/// Append-only `timestamp,name,score,rounds` text file.
pub struct Leaderboard
{
    path: PathBuf,
}

impl Leaderboard
{
    pub fn new(path: impl Into<PathBuf>) -> Self
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path
    {
        &self.path
    }

    pub fn append(&self, name: &str, score: i64, rounds: u32) -> Result<()>
    {
        self.append_entry(&LeaderboardEntry {
            timestamp: now_timestamp(),
            name: name.to_string(),
            score,
            rounds,
        })
    }

    pub fn append_entry(&self, entry: &LeaderboardEntry) -> Result<()>
    {
        append_line(&self.path, &entry.to_line())?;
        info!(
            "recorded score {}/{} for '{}' in {}",
            entry.score,
            entry.rounds,
            entry.name,
            self.path.display()
        );
        Ok(())
    }

    /// All parseable records in file order; a missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<LeaderboardEntry>>
    {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        // Decoded per line so one corrupt record cannot hide the rest.
        Ok(bytes
            .split(|&byte| byte == b'\n')
            .filter_map(|line| match std::str::from_utf8(line) {
                Ok(line) => LeaderboardEntry::parse(line),
                Err(_) => {
                    debug!("skipping non-UTF-8 leaderboard line");
                    None
                }
            })
            .collect())
    }

    /// Highest score first; equal scores put the later timestamp first.
    pub fn top(&self, n: usize) -> Result<Vec<LeaderboardEntry>>
    {
        let mut entries = self.read_all()?;
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        entries.truncate(n);
        Ok(entries)
    }

    pub fn render(&self, n: usize) -> Result<Vec<String>>
    {
        let entries = self.top(n)?;
        if entries.is_empty() {
            return Ok(vec!["No scores yet.".to_string()]);
        }
        Ok(entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                format!(
                    "{}. {} - {}/{}  ({})",
                    idx + 1,
                    entry.name,
                    entry.score,
                    entry.rounds,
                    entry.timestamp
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn short_lines_are_rejected()
    {
        assert_eq!(LeaderboardEntry::parse("2025-01-01T00:00:00,ana,3"), None);
        assert_eq!(LeaderboardEntry::parse("   "), None);
    }

    #[test]
    fn bad_numbers_fall_back_to_zero()
    {
        let entry = LeaderboardEntry::parse("t,ana,lots,many").unwrap();
        assert_eq!(entry.score, 0);
        assert_eq!(entry.rounds, 0);
        assert_eq!(entry.name, "ana");
    }

    #[test]
    fn commas_in_names_do_not_split_the_record()
    {
        let entry = LeaderboardEntry {
            timestamp: "t".to_string(),
            name: "cak, rek".to_string(),
            score: 2,
            rounds: 5,
        };
        assert_eq!(entry.to_line(), "t,cak  rek,2,5");
        assert_eq!(LeaderboardEntry::parse(&entry.to_line()).unwrap().score, 2);
    }
}
