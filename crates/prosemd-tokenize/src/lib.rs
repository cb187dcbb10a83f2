//! Word and sentence tokenization.
//!
//! Words are maximal runs of Unicode word characters (letters, digits,
//! connector punctuation such as `_`). Everything else separates words and
//! is dropped, so `don't` yields `don` and `t`.
//!
//! Sentences end at a run of `.`, `!` or `?`, or at end of text, and only
//! count when they contain at least one word. A period does not end a
//! sentence inside a decimal number (`3.14`) or directly after a known
//! abbreviation (`Dr.`). Text without words has zero sentences; text with
//! words but no terminator has one.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid regex literal"));

/// Abbreviations whose trailing period is not a sentence boundary.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "inc", "ltd", "corp", "fig",
    "approx", "dept", "est",
];

/// Ordered word tokens of a document plus its sentence count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream<'a> {
    words: Vec<&'a str>,
    sentence_count: usize,
}

impl<'a> TokenStream<'a> {
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }
}

/// Tokenize `text` into words and count its sentences in one pass.
pub fn tokenize(text: &str) -> TokenStream<'_> {
    let mut words = Vec::new();
    let mut sentence_count = 0usize;
    let mut open_sentence = false;
    let mut cursor = 0usize;

    for m in WORD.find_iter(text) {
        if let Some(&prev) = words.last()
            && gap_ends_sentence(&text[cursor..m.start()], prev, m.as_str())
        {
            sentence_count += 1;
        }
        words.push(m.as_str());
        open_sentence = true;
        cursor = m.end();
    }
    if open_sentence {
        sentence_count += 1;
    }

    TokenStream {
        words,
        sentence_count,
    }
}

/// Word tokens of `text`, in order.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of sentences in `text`.
pub fn sentence_count(text: &str) -> usize {
    tokenize(text).sentence_count()
}

/// Decide whether the non-word span between `prev` and `next` closes a sentence.
fn gap_ends_sentence(gap: &str, prev: &str, next: &str) -> bool {
    for (idx, ch) in gap.char_indices() {
        match ch {
            '!' | '?' => return true,
            '.' => {
                if idx == 0 && (is_abbreviation(prev) || is_decimal_point(gap, prev, next)) {
                    continue;
                }
                return true;
            }
            _ => {}
        }
    }
    false
}

fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS
        .iter()
        .any(|abbr| abbr.eq_ignore_ascii_case(word))
}

fn is_decimal_point(gap: &str, prev: &str, next: &str) -> bool {
    gap == "."
        && prev.ends_with(|c: char| c.is_ascii_digit())
        && next.starts_with(|c: char| c.is_ascii_digit())
}
