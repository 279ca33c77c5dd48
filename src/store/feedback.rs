use super::{append_line, now_timestamp, sanitize_field};
use crate::error::Result;
use log::info;
use std::path::{Path, PathBuf};

/// Player corrections, one `timestamp\tlabel\ttext` line each. Write-only.
pub struct FeedbackLog
{
    path: PathBuf,
}

impl FeedbackLog
{
    pub fn new(path: impl Into<PathBuf>) -> Self
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path
    {
        &self.path
    }

    pub fn append(&self, text: &str, label: &str) -> Result<()>
    {
        let line = format!(
            "{}\t{}\t{}",
            now_timestamp(),
            sanitize_field(label, '\t'),
            sanitize_field(text, '\t')
        );
        append_line(&self.path, &line)?;
        info!("saved feedback labelled '{label}' to {}", self.path.display());
        Ok(())
    }
}
