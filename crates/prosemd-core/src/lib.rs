//! # prosemd-core
//!
//! **Tier 4 (Library Façade)**
//!
//! The scoring engine. A [`Scorer`] owns the shared, read-only lexicon and
//! an injected polarity source, and turns one document's text into a
//! [`MetricsRecord`] in a single pass.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use prosemd_core::{Lexicon, ScoreConfig, Scorer};
//!
//! let lexicon = Arc::new(Lexicon::new(["love"], ["hate"]));
//! let scorer = Scorer::new(lexicon, Arc::new(|_: &str| 0.5), ScoreConfig::default())?;
//! let record = scorer.score("I love this. We love that.")?;
//! assert_eq!(record.word_count, 6);
//! assert_eq!(record.positive_score, 2);
//! assert_eq!(record.personal_pronouns, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## What belongs here
//! * Orchestration of tokenization, matching, estimation and formulas
//! * Per-document error classification
//! * Parallel batch scoring
//!
//! ## What does NOT belong here
//! * Reading files or streams (the CLI's job)
//! * Output rendering

#![forbid(unsafe_code)]

mod batch;
mod error;
mod scorer;

pub use error::ScoreError;
pub use scorer::{Analysis, Scorer, content_hash, score};

pub use prosemd_lexicon::{Lexicon, LexiconCounts, LexiconLoadError};
pub use prosemd_pronoun::PronounCounts;
pub use prosemd_sentiment::{Polarity, Sentiment, ValencePolarity};
pub use prosemd_types::{
    BatchReceipt, BatchSummary, ConfigError, DocumentFailure, DocumentOutcome, DocumentReceipt,
    FailureKind, MetricField, MetricValue, MetricsRecord, SCHEMA_VERSION, ScoreConfig,
};
