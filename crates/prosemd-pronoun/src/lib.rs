//! First-person pronoun counting.
//!
//! Tokens are lower-cased before matching, so `I`, `We` and `OUR` all count.
//! The full closed set is tallied, but the reported `personal_pronouns`
//! figure only sums `i` and `we`.

#![forbid(unsafe_code)]

/// The closed set of first-person pronouns, lower-case.
pub const FIRST_PERSON: [&str; 8] = ["i", "me", "my", "mine", "we", "us", "our", "ours"];

/// Occurrences of each first-person pronoun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PronounCounts {
    pub i: usize,
    pub me: usize,
    pub my: usize,
    pub mine: usize,
    pub we: usize,
    pub us: usize,
    pub our: usize,
    pub ours: usize,
}

impl PronounCounts {
    /// Tally pronouns across a token sequence.
    pub fn count<'t, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut counts = Self::default();
        for token in tokens {
            counts.record(token);
        }
        counts
    }

    fn record(&mut self, token: &str) {
        // Longest pronoun is four bytes; skip allocation for anything longer.
        if token.len() > 4 {
            return;
        }
        let slot = match token.to_lowercase().as_str() {
            "i" => &mut self.i,
            "me" => &mut self.me,
            "my" => &mut self.my,
            "mine" => &mut self.mine,
            "we" => &mut self.we,
            "us" => &mut self.us,
            "our" => &mut self.our,
            "ours" => &mut self.ours,
            _ => return,
        };
        *slot += 1;
    }

    /// Count for one pronoun of [`FIRST_PERSON`]; zero for anything else.
    pub fn get(&self, pronoun: &str) -> usize {
        match pronoun {
            "i" => self.i,
            "me" => self.me,
            "my" => self.my,
            "mine" => self.mine,
            "we" => self.we,
            "us" => self.us,
            "our" => self.our,
            "ours" => self.ours,
            _ => 0,
        }
    }

    /// Every pronoun in the set.
    pub fn total(&self) -> usize {
        FIRST_PERSON.iter().map(|p| self.get(p)).sum()
    }

    /// The reported figure: `i` plus `we` only.
    pub fn personal_pronouns(&self) -> usize {
        self.i + self.we
    }
}
