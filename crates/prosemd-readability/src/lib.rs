//! Composite readability formulas.
//!
//! Flesch Reading Ease:
//! FRE = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
//!
//! Fog index, in the variant carried by existing reports:
//! FOG = 0.4 * (FRE + percentage_complex_words)
//!
//! This is not the textbook Gunning Fog index, which uses average sentence
//! length in place of FRE.

#![forbid(unsafe_code)]

use prosemd_math::{checked_ratio, percentage};
use thiserror::Error;

pub const FLESCH_BASE: f64 = 206.835;
pub const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
pub const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;
pub const FOG_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadabilityError {
    #[error("no words to measure")]
    NoWords,

    #[error("complex word count {complex} exceeds word count {words}")]
    ComplexExceedsWords { complex: usize, words: usize },
}

/// Counts gathered from one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadabilityInputs {
    pub word_count: usize,
    pub sentence_count: usize,
    pub complex_word_count: usize,
    /// Sum of estimated syllables over all tokens.
    pub syllable_count: usize,
    /// Sum of token lengths in characters.
    pub character_count: usize,
}

/// Derived readability figures. Values are not rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readability {
    pub percentage_complex_words: f64,
    pub flesch_reading_ease: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub avg_word_length: f64,
    pub syllables_per_word: f64,
}

/// Compute every readability figure from raw counts.
///
/// A document with words but no detected sentence boundary is treated as a
/// single sentence.
pub fn compute(inputs: &ReadabilityInputs) -> Result<Readability, ReadabilityError> {
    let words = inputs.word_count;
    if words == 0 {
        return Err(ReadabilityError::NoWords);
    }
    if inputs.complex_word_count > words {
        return Err(ReadabilityError::ComplexExceedsWords {
            complex: inputs.complex_word_count,
            words,
        });
    }
    let sentences = inputs.sentence_count.max(1);

    let avg_words_per_sentence =
        checked_ratio(words as f64, sentences).ok_or(ReadabilityError::NoWords)?;
    let syllables_per_word =
        checked_ratio(inputs.syllable_count as f64, words).ok_or(ReadabilityError::NoWords)?;
    let avg_word_length =
        checked_ratio(inputs.character_count as f64, words).ok_or(ReadabilityError::NoWords)?;
    let percentage_complex_words =
        percentage(inputs.complex_word_count, words).ok_or(ReadabilityError::NoWords)?;

    let flesch_reading_ease = flesch_from_averages(avg_words_per_sentence, syllables_per_word);

    Ok(Readability {
        percentage_complex_words,
        flesch_reading_ease,
        fog_index: fog_index(flesch_reading_ease, percentage_complex_words),
        avg_words_per_sentence,
        avg_word_length,
        syllables_per_word,
    })
}

/// Flesch Reading Ease from raw counts; `None` when either denominator is zero.
#[must_use]
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> Option<f64> {
    let words_per_sentence = checked_ratio(words as f64, sentences)?;
    let syllables_per_word = checked_ratio(syllables as f64, words)?;
    Some(flesch_from_averages(words_per_sentence, syllables_per_word))
}

/// Fog index as defined for these reports: `0.4 * (FRE + %complex)`.
#[must_use]
pub fn fog_index(flesch_reading_ease: f64, percentage_complex_words: f64) -> f64 {
    FOG_WEIGHT * (flesch_reading_ease + percentage_complex_words)
}

fn flesch_from_averages(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * words_per_sentence
        - FLESCH_SYLLABLE_WEIGHT * syllables_per_word
}
