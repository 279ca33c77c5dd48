//! Flat text files in the working directory.

mod feedback;
mod leaderboard;

pub use feedback::FeedbackLog;
pub use leaderboard::{DEFAULT_TOP, Leaderboard, LeaderboardEntry};

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

fn now_timestamp() -> String
{
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Keeps a field on one line and free of the record separator.
fn sanitize_field(value: &str, separator: char) -> String
{
    value
        .chars()
        .map(|ch| {
            if ch == separator || ch == '\n' || ch == '\r' {
                ' '
            } else {
                ch
            }
        })
        .collect()
}

fn append_line(path: &Path, line: &str) -> io::Result<()>
{
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn timestamps_use_fixed_width_iso_format()
    {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2025-01-01T00:00:00.000000".len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn later_timestamps_sort_after_earlier_ones()
    {
        let first = now_timestamp();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = now_timestamp();
        assert!(second > first, "{second} should sort after {first}");
    }

    #[test]
    fn sanitize_replaces_separator_and_breaks()
    {
        assert_eq!(sanitize_field("a,b\nc", ','), "a b c");
        assert_eq!(sanitize_field("a\tb", ','), "a\tb");
    }
}
