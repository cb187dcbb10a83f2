//! Positive/negative word lexicons.
//!
//! A [`Lexicon`] is loaded once and shared read-only. Matching is an exact,
//! case-sensitive string comparison: no stemming and no case folding.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading word lists.
#[derive(Debug, Error)]
pub enum LexiconLoadError {
    #[error("failed to read {kind} file {}: {source}", .path.display())]
    Read {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {kind} file {} at line {line}: {reason}", .path.display())]
    Malformed {
        kind: &'static str,
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// The two reference word sets.
///
/// The sets may overlap; a word present in both counts toward both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

/// Per-document lexicon hit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconCounts {
    pub positive: usize,
    pub negative: usize,
}

impl Lexicon {
    pub fn new<P, N, S1, S2>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S1>,
        N: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Load both word lists from disk.
    ///
    /// Files hold one word per line. Blank lines and lines starting with `;`
    /// are skipped. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_files(positive: &Path, negative: &Path) -> Result<Self, LexiconLoadError> {
        let lexicon = Self {
            positive: read_word_list("positive", positive)?,
            negative: read_word_list("negative", negative)?,
        };
        tracing::debug!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_words(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative_words(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    /// Count tokens found in each set, with repetition.
    pub fn count_matches<'t, I>(&self, tokens: I) -> LexiconCounts
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut counts = LexiconCounts::default();
        for token in tokens {
            if self.is_positive(token) {
                counts.positive += 1;
            }
            if self.is_negative(token) {
                counts.negative += 1;
            }
        }
        counts
    }
}

/// Parse word-list text into a set.
pub fn parse_word_list(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(str::to_string)
        .collect()
}

/// Read a reference file as text, replacing invalid UTF-8.
///
/// `kind` names the file in error messages (`"positive"`, `"valence"`, ...).
pub fn read_lossy(kind: &'static str, path: &Path) -> Result<String, LexiconLoadError> {
    let bytes = std::fs::read(path).map_err(|source| LexiconLoadError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_word_list(kind: &'static str, path: &Path) -> Result<BTreeSet<String>, LexiconLoadError> {
    Ok(parse_word_list(&read_lossy(kind, path)?))
}
