//! Lexicon-driven compound polarity in the style of VADER.

use std::collections::HashMap;
use std::path::Path;

use prosemd_lexicon::{Lexicon, LexiconLoadError, read_lossy};
use prosemd_tokenize::words;

use crate::Polarity;

/// Valence given to words taken from a positive/negative word list.
pub const LEXICON_VALENCE: f64 = 2.0;

/// Multiplier applied to a valence preceded by a negator.
pub const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens are searched for a negator.
pub const NEGATION_WINDOW: usize = 3;

/// Added to the raw sum per `!`, in the direction of its sign.
pub const EXCLAMATION_BOOST: f64 = 0.292;

pub const MAX_EXCLAMATIONS: usize = 4;

/// Controls how quickly the compound score approaches ±1.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

/// Lower-cased tokens that flip the valence of what follows.
///
/// `t` is the tail left by splitting contractions such as `don't`.
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "t",
];

/// Built-in [`Polarity`] source backed by a word → valence table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValencePolarity {
    valences: HashMap<String, f64>,
}

impl ValencePolarity {
    pub fn new<I, S>(valences: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            valences: valences
                .into_iter()
                .map(|(word, v)| (word.into().to_lowercase(), v))
                .collect(),
        }
    }

    /// Derive valences from a word-list lexicon: positive words score
    /// `+LEXICON_VALENCE`, negative words `-LEXICON_VALENCE`. A word in both
    /// lists nets to zero.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut valences: HashMap<String, f64> = HashMap::new();
        for word in lexicon.positive_words() {
            *valences.entry(word.to_lowercase()).or_insert(0.0) += LEXICON_VALENCE;
        }
        for word in lexicon.negative_words() {
            *valences.entry(word.to_lowercase()).or_insert(0.0) -= LEXICON_VALENCE;
        }
        valences.retain(|_, v| *v != 0.0);
        Self { valences }
    }

    /// Parse a VADER-format table: `token<TAB>mean<TAB>...` per line.
    pub fn parse_vader(content: &str, path: &Path) -> Result<Self, LexiconLoadError> {
        let mut valences = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let malformed = |reason: String| LexiconLoadError::Malformed {
                kind: "valence",
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            };
            let mut fields = line.split('\t');
            let token = fields.next().map(str::trim).unwrap_or_default();
            let Some(raw) = fields.next() else {
                return Err(malformed("expected a tab-separated valence".to_string()));
            };
            let value = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| malformed(format!("invalid valence {:?}", raw.trim())))?;
            if token.is_empty() {
                return Err(malformed("empty token".to_string()));
            }
            valences.insert(token.to_lowercase(), value);
        }
        Ok(Self { valences })
    }

    /// Load a VADER-format table from disk.
    pub fn from_vader_file(path: &Path) -> Result<Self, LexiconLoadError> {
        let table = Self::parse_vader(&read_lossy("valence", path)?, path)?;
        tracing::debug!(entries = table.len(), path = %path.display(), "loaded valence table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    /// Unnormalized sum of valences, after negation and emphasis.
    pub fn raw_sum(&self, text: &str) -> f64 {
        let tokens: Vec<String> = words(text).into_iter().map(str::to_lowercase).collect();

        let mut sum = 0.0;
        for (idx, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token) else {
                continue;
            };
            let window = &tokens[idx.saturating_sub(NEGATION_WINDOW)..idx];
            let negated = window.iter().any(|t| NEGATORS.contains(&t.as_str()));
            sum += if negated {
                valence * NEGATION_SCALAR
            } else {
                valence
            };
        }

        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += bangs * EXCLAMATION_BOOST * sum.signum();
        }
        sum
    }
}

impl Polarity for ValencePolarity {
    fn polarity(&self, text: &str) -> f64 {
        normalize(self.raw_sum(text))
    }
}

/// Map an unbounded sum into `(-1, 1)`: `x / sqrt(x² + alpha)`.
#[must_use]
pub fn normalize(sum: f64) -> f64 {
    sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()
}
