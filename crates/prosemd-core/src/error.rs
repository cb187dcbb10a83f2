use prosemd_readability::ReadabilityError;
use prosemd_sentiment::SentimentError;
use prosemd_types::FailureKind;
use thiserror::Error;

/// Why a single document could not be scored.
///
/// These are per-document failures: a batch records them and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreError {
    #[error("text contains no words")]
    DegenerateInput,

    #[error("polarity source returned {0}, expected a value in [-1, 1]")]
    InvalidPolarity(f64),
}

impl ScoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ScoreError::DegenerateInput => FailureKind::DegenerateInput,
            ScoreError::InvalidPolarity(_) => FailureKind::InvalidPolarity,
        }
    }
}

impl From<SentimentError> for ScoreError {
    fn from(err: SentimentError) -> Self {
        match err {
            SentimentError::OutOfRange(value) => ScoreError::InvalidPolarity(value),
        }
    }
}

impl From<ReadabilityError> for ScoreError {
    fn from(err: ReadabilityError) -> Self {
        match err {
            // Complex words are a subset of words; only the empty case is reachable.
            ReadabilityError::NoWords | ReadabilityError::ComplexExceedsWords { .. } => {
                ScoreError::DegenerateInput
            }
        }
    }
}
