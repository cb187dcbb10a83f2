use std::fmt;
use std::sync::Arc;

use prosemd_lexicon::{Lexicon, LexiconCounts};
use prosemd_pronoun::PronounCounts;
use prosemd_readability::{Readability, ReadabilityInputs};
use prosemd_sentiment::{Polarity, Sentiment, ValencePolarity};
use prosemd_syllable::SyllableTally;
use prosemd_tokenize::tokenize;
use prosemd_types::{
    ConfigError, DocumentFailure, DocumentOutcome, DocumentReceipt, MetricsRecord, ScoreConfig,
};

use crate::error::ScoreError;

/// Scores documents against a shared lexicon and polarity source.
///
/// Holds no per-document state; a single instance can be shared across
/// threads and reused for any number of documents.
#[derive(Clone)]
pub struct Scorer {
    lexicon: Arc<Lexicon>,
    polarity: Arc<dyn Polarity>,
    config: ScoreConfig,
}

impl fmt::Debug for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scorer")
            .field("positive_words", &self.lexicon.positive_len())
            .field("negative_words", &self.lexicon.negative_len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Everything computed for one document, including the intermediate
/// counts that do not surface in the [`MetricsRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub metrics: MetricsRecord,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub lexicon: LexiconCounts,
    pub pronouns: PronounCounts,
    pub sentiment: Sentiment,
    pub readability: Readability,
}

impl Scorer {
    pub fn new(
        lexicon: Arc<Lexicon>,
        polarity: Arc<dyn Polarity>,
        config: ScoreConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            lexicon,
            polarity,
            config,
        })
    }

    /// Scorer whose polarity comes from the lexicon itself via
    /// [`ValencePolarity::from_lexicon`].
    pub fn with_lexicon_polarity(
        lexicon: Arc<Lexicon>,
        config: ScoreConfig,
    ) -> Result<Self, ConfigError> {
        let polarity = Arc::new(ValencePolarity::from_lexicon(&lexicon));
        Self::new(lexicon, polarity, config)
    }

    pub fn config(&self) -> ScoreConfig {
        self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Compute the metrics record for `text`.
    pub fn score(&self, text: &str) -> Result<MetricsRecord, ScoreError> {
        self.analyze(text).map(|analysis| analysis.metrics)
    }

    /// Compute the metrics record along with its intermediate counts.
    pub fn analyze(&self, text: &str) -> Result<Analysis, ScoreError> {
        analyze_text(text, &self.lexicon, self.polarity.as_ref(), self.config)
    }

    /// Score one identified document, capturing failure as an outcome.
    pub fn score_document(&self, id: &str, text: &str) -> DocumentOutcome {
        match self.analyze(text) {
            Ok(analysis) => DocumentOutcome::Scored(DocumentReceipt {
                id: id.to_string(),
                content_hash: content_hash(text),
                sentence_count: analysis.sentence_count,
                metrics: analysis.metrics,
            }),
            Err(err) => {
                tracing::warn!(id, error = %err, "document not scored");
                DocumentOutcome::Failed(DocumentFailure {
                    id: id.to_string(),
                    kind: err.kind(),
                    message: err.to_string(),
                })
            }
        }
    }
}

/// One-shot scoring without building a [`Scorer`].
///
/// `config` is used as given; [`Scorer::new`] is the validating path.
pub fn score(
    text: &str,
    lexicon: &Lexicon,
    polarity: &dyn Polarity,
    config: ScoreConfig,
) -> Result<MetricsRecord, ScoreError> {
    analyze_text(text, lexicon, polarity, config).map(|analysis| analysis.metrics)
}

#[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
fn analyze_text(
    text: &str,
    lexicon: &Lexicon,
    polarity: &dyn Polarity,
    config: ScoreConfig,
) -> Result<Analysis, ScoreError> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(ScoreError::DegenerateInput);
    }

    let counts = lexicon.count_matches(tokens.iter());
    let SyllableTally {
        syllables,
        complex_words,
    } = prosemd_syllable::tally(tokens.iter(), config.complexity_threshold);
    let pronouns = PronounCounts::count(tokens.iter());
    let character_count: usize = tokens.iter().map(|t| t.chars().count()).sum();
    let sentiment = prosemd_sentiment::assess(polarity, text)?;

    let readability = prosemd_readability::compute(&ReadabilityInputs {
        word_count: tokens.len(),
        sentence_count: tokens.sentence_count(),
        complex_word_count: complex_words,
        syllable_count: syllables,
        character_count,
    })?;

    tracing::trace!(
        words = tokens.len(),
        sentences = tokens.sentence_count(),
        syllables,
        complex_words,
        "document counted"
    );

    let metrics = MetricsRecord {
        positive_score: counts.positive,
        negative_score: counts.negative,
        polarity_score: sentiment.polarity,
        subjectivity_score: sentiment.subjectivity,
        avg_sentence_length: readability.flesch_reading_ease,
        percentage_complex_words: readability.percentage_complex_words,
        fog_index: readability.fog_index,
        avg_words_per_sentence: readability.avg_words_per_sentence,
        complex_word_count: complex_words,
        word_count: tokens.len(),
        syllable_per_word: readability.syllables_per_word,
        personal_pronouns: pronouns.personal_pronouns(),
        avg_word_length: readability.avg_word_length,
    };

    Ok(Analysis {
        metrics,
        sentence_count: tokens.sentence_count(),
        syllable_count: syllables,
        lexicon: counts,
        pronouns,
        sentiment,
        readability,
    })
}

/// BLAKE3 hex digest of a document's text.
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
