//! Polarity scoring.
//!
//! The scoring engine never computes sentiment itself: it asks a
//! [`Polarity`] implementation for a compound score in `[-1, 1]`. Any
//! `Fn(&str) -> f64` closure qualifies. [`ValencePolarity`] is the built-in
//! default.
//!
//! Subjectivity is reported as `|polarity|`; there is no separate
//! objectivity classifier.

#![forbid(unsafe_code)]

mod valence;

pub use valence::{
    EXCLAMATION_BOOST, LEXICON_VALENCE, MAX_EXCLAMATIONS, NEGATION_SCALAR, NEGATION_WINDOW,
    NEGATORS, NORMALIZATION_ALPHA, ValencePolarity, normalize,
};

use thiserror::Error;

/// A source of compound polarity scores.
pub trait Polarity: Send + Sync {
    /// Compound polarity of `text`, expected in `[-1, 1]`.
    fn polarity(&self, text: &str) -> f64;
}

impl<F> Polarity for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SentimentError {
    #[error("polarity {0} is outside [-1, 1]")]
    OutOfRange(f64),
}

/// Polarity plus the derived subjectivity proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Validate a raw polarity and derive subjectivity as its magnitude.
    pub fn from_polarity(polarity: f64) -> Result<Self, SentimentError> {
        if !polarity.is_finite() || !(-1.0..=1.0).contains(&polarity) {
            return Err(SentimentError::OutOfRange(polarity));
        }
        Ok(Self {
            polarity,
            subjectivity: polarity.abs(),
        })
    }
}

/// Ask `source` for the polarity of `text` and derive the sentiment pair.
pub fn assess(source: &dyn Polarity, text: &str) -> Result<Sentiment, SentimentError> {
    Sentiment::from_polarity(source.polarity(text))
}
