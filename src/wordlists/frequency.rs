//! Word frequency table
//!
//! Maps each word to a corpus weight (natural log of its raw count). GUESS-mode scoring
//! looks words up here; a word missing from the table weighs zero.

use rustc_hash::FxHashMap;

/// Read-only word → weight lookup
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: FxHashMap<String, f64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the weight for `word`
    pub fn insert(&mut self, word: impl Into<String>, weight: f64) {
        self.weights.insert(word.into(), weight);
    }

    /// Weight of `word`, or 0.0 when unknown
    #[must_use]
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(w, f)| (w.into(), f)).collect(),
        }
    }
}
