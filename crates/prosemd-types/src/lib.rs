//! # prosemd-types
//!
//! **Tier 0 (Core Types)**
//!
//! Pure data structures shared by the scoring crates and the CLI.
//! No I/O and no scoring logic.
//!
//! ## What belongs here
//! * The per-document [`MetricsRecord`] and its fixed field schema
//! * Clap-free scoring settings ([`ScoreConfig`])
//! * Receipt envelopes for single documents and batches
//!
//! ## What does NOT belong here
//! * Tokenization, lexicon matching or formulas
//! * File or stream handling

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version for batch receipts.
/// v1: Initial release.
pub const SCHEMA_VERSION: u32 = 1;

/// Default syllable threshold at which a word counts as complex.
pub const DEFAULT_COMPLEXITY_THRESHOLD: usize = 2;

// -----------------------
// Settings
// -----------------------

/// Errors from validating scoring settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("complexity threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),
}

/// Knobs that change how a document is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Minimum estimated syllables for a word to be classified as complex.
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
        }
    }
}

impl ScoreConfig {
    /// Settings with a custom complexity threshold.
    pub fn with_threshold(complexity_threshold: usize) -> Self {
        Self {
            complexity_threshold,
        }
    }

    /// Reject settings that would make every word complex by definition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.complexity_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(self.complexity_threshold));
        }
        Ok(())
    }
}

fn default_complexity_threshold() -> usize {
    DEFAULT_COMPLEXITY_THRESHOLD
}

// -----------------------
// Metrics
// -----------------------

/// The fixed, fully-populated metric set computed for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    /// Flesch Reading Ease. The name is kept for compatibility with
    /// existing consumers of this column.
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// Identifies one column of a [`MetricsRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricField {
    PositiveScore,
    NegativeScore,
    PolarityScore,
    SubjectivityScore,
    AvgSentenceLength,
    PercentageComplexWords,
    FogIndex,
    AvgWordsPerSentence,
    ComplexWordCount,
    WordCount,
    SyllablePerWord,
    PersonalPronouns,
    AvgWordLength,
}

impl MetricField {
    /// Every field, in report column order.
    pub const ALL: [MetricField; 13] = [
        MetricField::PositiveScore,
        MetricField::NegativeScore,
        MetricField::PolarityScore,
        MetricField::SubjectivityScore,
        MetricField::AvgSentenceLength,
        MetricField::PercentageComplexWords,
        MetricField::FogIndex,
        MetricField::AvgWordsPerSentence,
        MetricField::ComplexWordCount,
        MetricField::WordCount,
        MetricField::SyllablePerWord,
        MetricField::PersonalPronouns,
        MetricField::AvgWordLength,
    ];

    /// Serialized key, matching the struct field name.
    pub const fn key(self) -> &'static str {
        match self {
            MetricField::PositiveScore => "positive_score",
            MetricField::NegativeScore => "negative_score",
            MetricField::PolarityScore => "polarity_score",
            MetricField::SubjectivityScore => "subjectivity_score",
            MetricField::AvgSentenceLength => "avg_sentence_length",
            MetricField::PercentageComplexWords => "percentage_complex_words",
            MetricField::FogIndex => "fog_index",
            MetricField::AvgWordsPerSentence => "avg_words_per_sentence",
            MetricField::ComplexWordCount => "complex_word_count",
            MetricField::WordCount => "word_count",
            MetricField::SyllablePerWord => "syllable_per_word",
            MetricField::PersonalPronouns => "personal_pronouns",
            MetricField::AvgWordLength => "avg_word_length",
        }
    }

    /// Human-facing column label.
    pub const fn label(self) -> &'static str {
        match self {
            MetricField::PositiveScore => "POSITIVE SCORE",
            MetricField::NegativeScore => "NEGATIVE SCORE",
            MetricField::PolarityScore => "POLARITY SCORE",
            MetricField::SubjectivityScore => "SUBJECTIVITY SCORE",
            MetricField::AvgSentenceLength => "AVG SENTENCE LENGTH",
            MetricField::PercentageComplexWords => "PERCENTAGE OF COMPLEX WORDS",
            MetricField::FogIndex => "FOG INDEX",
            MetricField::AvgWordsPerSentence => "AVG NUMBER OF WORDS PER SENTENCE",
            MetricField::ComplexWordCount => "COMPLEX WORD COUNT",
            MetricField::WordCount => "WORD COUNT",
            MetricField::SyllablePerWord => "SYLLABLE PER WORD",
            MetricField::PersonalPronouns => "PERSONAL PRONOUNS",
            MetricField::AvgWordLength => "AVG WORD LENGTH",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A metric value: either an exact count or a real-valued score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Score(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Score(v) => v,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Score(v) => write!(f, "{v}"),
        }
    }
}

impl MetricsRecord {
    /// Look up a single field.
    pub fn get(&self, field: MetricField) -> MetricValue {
        match field {
            MetricField::PositiveScore => MetricValue::Count(self.positive_score),
            MetricField::NegativeScore => MetricValue::Count(self.negative_score),
            MetricField::PolarityScore => MetricValue::Score(self.polarity_score),
            MetricField::SubjectivityScore => MetricValue::Score(self.subjectivity_score),
            MetricField::AvgSentenceLength => MetricValue::Score(self.avg_sentence_length),
            MetricField::PercentageComplexWords => {
                MetricValue::Score(self.percentage_complex_words)
            }
            MetricField::FogIndex => MetricValue::Score(self.fog_index),
            MetricField::AvgWordsPerSentence => MetricValue::Score(self.avg_words_per_sentence),
            MetricField::ComplexWordCount => MetricValue::Count(self.complex_word_count),
            MetricField::WordCount => MetricValue::Count(self.word_count),
            MetricField::SyllablePerWord => MetricValue::Score(self.syllable_per_word),
            MetricField::PersonalPronouns => MetricValue::Count(self.personal_pronouns),
            MetricField::AvgWordLength => MetricValue::Score(self.avg_word_length),
        }
    }

    /// The record as an ordered list of `(field, value)` pairs.
    pub fn fields(&self) -> Vec<(MetricField, MetricValue)> {
        MetricField::ALL
            .iter()
            .map(|&field| (field, self.get(field)))
            .collect()
    }

    /// Copy of the record with every score passed through `round`.
    /// Counts are left untouched.
    pub fn map_scores(&self, round: impl Fn(f64) -> f64) -> Self {
        Self {
            polarity_score: round(self.polarity_score),
            subjectivity_score: round(self.subjectivity_score),
            avg_sentence_length: round(self.avg_sentence_length),
            percentage_complex_words: round(self.percentage_complex_words),
            fog_index: round(self.fog_index),
            avg_words_per_sentence: round(self.avg_words_per_sentence),
            syllable_per_word: round(self.syllable_per_word),
            avg_word_length: round(self.avg_word_length),
            ..*self
        }
    }
}

// -----------------------
// Receipts
// -----------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "prosemd".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Metrics for one successfully scored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReceipt {
    /// Caller-supplied correlation key. Not interpreted.
    pub id: String,
    /// BLAKE3 hex digest of the scored text.
    pub content_hash: String,
    pub sentence_count: usize,
    pub metrics: MetricsRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The text contained no word tokens.
    DegenerateInput,
    /// The polarity source returned a value outside `[-1, 1]`.
    InvalidPolarity,
    /// The document could not be read or decoded.
    InvalidInput,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::DegenerateInput => write!(f, "degenerate_input"),
            FailureKind::InvalidPolarity => write!(f, "invalid_polarity"),
            FailureKind::InvalidInput => write!(f, "invalid_input"),
        }
    }
}

/// A document that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub id: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Result of scoring one document inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Scored(DocumentReceipt),
    Failed(DocumentFailure),
}

impl DocumentOutcome {
    pub fn id(&self) -> &str {
        match self {
            DocumentOutcome::Scored(receipt) => &receipt.id,
            DocumentOutcome::Failed(failure) => &failure.id,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, DocumentOutcome::Scored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BatchSummary {
    pub scored: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[DocumentOutcome]) -> Self {
        let scored = outcomes.iter().filter(|o| o.is_scored()).count();
        Self {
            scored,
            failed: outcomes.len() - scored,
        }
    }
}

/// Envelope written for a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub config: ScoreConfig,
    pub summary: BatchSummary,
    pub documents: Vec<DocumentOutcome>,
}

impl BatchReceipt {
    pub fn new(generated_at_ms: u128, config: ScoreConfig, documents: Vec<DocumentOutcome>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at_ms,
            tool: ToolInfo::current(),
            config,
            summary: BatchSummary::from_outcomes(&documents),
            documents,
        }
    }
}
