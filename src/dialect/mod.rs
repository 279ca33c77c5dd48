//! Keyword-count dialect classifier.
//!
//! Scoring is a plain keyword count over normalized tokens; [`predict`] turns
//! the counts into a single label with a two-level tie-break.

pub mod keywords;

use crate::error::{GameError, Result};
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

#[derive(Debug, Clone)]
pub struct DialectEntry
{
    label: String,
    keywords: Vec<String>,
}

impl DialectEntry
{
    pub fn label(&self) -> &str
    {
        &self.label
    }

    pub fn keywords(&self) -> &[String]
    {
        &self.keywords
    }
}

/// Ordered label -> keyword list mapping. Immutable once built.
#[derive(Debug, Clone)]
pub struct KeywordTable
{
    entries: Vec<DialectEntry>,
    fallback: String,
}

impl KeywordTable
{
    pub fn new(entries: Vec<(String, Vec<String>)>, fallback: &str) -> Result<Self>
    {
        if entries.is_empty() {
            return Err(GameError::Config("keyword table has no labels".to_string()));
        }
        let fallback = fallback.trim().to_lowercase();
        if fallback.is_empty() {
            return Err(GameError::Config("fallback label is empty".to_string()));
        }

        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(entries.len());
        for (label, keywords) in entries {
            let label = label.trim().to_lowercase();
            if label.is_empty() {
                return Err(GameError::Config("empty dialect label".to_string()));
            }
            if label == fallback {
                return Err(GameError::Config(format!(
                    "label '{label}' collides with the fallback label"
                )));
            }
            if !seen.insert(label.clone()) {
                return Err(GameError::Config(format!("duplicate label '{label}'")));
            }
            let mut normalized = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(GameError::Config(format!("empty keyword under '{label}'")));
                }
                normalized.push(keyword);
            }
            built.push(DialectEntry {
                label,
                keywords: normalized,
            });
        }

        Ok(Self {
            entries: built,
            fallback,
        })
    }

    pub fn from_static(entries: &[(&str, &[&str])], fallback: &str) -> Result<Self>
    {
        let owned = entries
            .iter()
            .map(|(label, words)| {
                (
                    label.to_string(),
                    words.iter().map(|word| word.to_string()).collect(),
                )
            })
            .collect();
        Self::new(owned, fallback)
    }

    /// The East Javanese table shipped with the game.
    pub fn builtin() -> Self
    {
        let entries = keywords::BUILTIN_TABLE
            .iter()
            .map(|(label, words)| DialectEntry {
                label: label.to_string(),
                keywords: words.iter().map(|word| word.to_string()).collect(),
            })
            .collect();
        Self {
            entries,
            fallback: keywords::FALLBACK_LABEL.to_string(),
        }
    }

    pub fn entries(&self) -> &[DialectEntry]
    {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str>
    {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn keywords_for(&self, label: &str) -> Option<&[String]>
    {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.keywords.as_slice())
    }

    pub fn fallback(&self) -> &str
    {
        &self.fallback
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelScore
{
    pub label: String,
    pub score: usize,
    /// One entry per contributing occurrence, duplicates kept.
    pub matches: Vec<String>,
}

impl LabelScore
{
    pub fn distinct_matches(&self) -> usize
    {
        self.distinct_keywords().len()
    }

    pub fn distinct_keywords(&self) -> Vec<&str>
    {
        self.matches
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores
{
    labels: Vec<LabelScore>,
}

impl Scores
{
    pub fn iter(&self) -> impl Iterator<Item = &LabelScore>
    {
        self.labels.iter()
    }

    pub fn get(&self, label: &str) -> Option<&LabelScore>
    {
        self.labels.iter().find(|entry| entry.label == label)
    }

    pub fn score_of(&self, label: &str) -> usize
    {
        self.get(label).map_or(0, |entry| entry.score)
    }

    pub fn max_score(&self) -> usize
    {
        self.labels.iter().map(|entry| entry.score).max().unwrap_or(0)
    }

    pub fn is_all_zero(&self) -> bool
    {
        self.max_score() == 0
    }
}

impl fmt::Display for Scores
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let parts: Vec<String> = self
            .labels
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.score))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction
{
    pub label: String,
    pub scores: Scores,
}

/// Lowercases, turns everything except ASCII letters, digits and apostrophes
/// into spaces, collapses whitespace and trims.
pub fn normalize(text: &str) -> String
{
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '\'' {
                ch
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn tokenize(text: &str) -> Vec<String>
{
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalized form used for word games: no spaces, no apostrophes.
pub fn bare_word(text: &str) -> String
{
    normalize(text)
        .chars()
        .filter(|ch| *ch != ' ' && *ch != '\'')
        .collect()
}

pub fn score(text: &str, table: &KeywordTable) -> Scores
{
    let tokens = tokenize(text);
    let joined = tokens.join(" ");

    let labels = table
        .entries()
        .iter()
        .map(|entry| {
            let mut score = 0usize;
            let mut matches = Vec::new();
            for keyword in &entry.keywords {
                if keyword.contains(' ') {
                    if joined.contains(keyword.as_str()) {
                        score += 1;
                        matches.push(keyword.clone());
                    }
                } else {
                    // Substring test also admits tokens that merely contain the keyword.
                    let count = tokens
                        .iter()
                        .filter(|token| token.contains(keyword.as_str()))
                        .count();
                    score += count;
                    matches.extend(std::iter::repeat_n(keyword.clone(), count));
                }
            }
            LabelScore {
                label: entry.label.clone(),
                score,
                matches,
            }
        })
        .collect();

    Scores { labels }
}

pub fn predict(text: &str, table: &KeywordTable) -> Prediction
{
    let scores = score(text, table);
    let best = scores.max_score();

    let label = if best == 0 {
        table.fallback().to_string()
    } else {
        let tied: Vec<&LabelScore> = scores.iter().filter(|entry| entry.score == best).collect();
        match tied.as_slice() {
            [only] => only.label.clone(),
            _ => {
                let top = tied
                    .iter()
                    .map(|entry| entry.distinct_matches())
                    .max()
                    .unwrap_or(0);
                let mut leaders = tied.iter().filter(|entry| entry.distinct_matches() == top);
                match (leaders.next(), leaders.next()) {
                    (Some(leader), None) => leader.label.clone(),
                    _ => table.fallback().to_string(),
                }
            }
        }
    };

    debug!("predicted '{label}' for {text:?} with scores {scores}");
    Prediction { label, scores }
}
