//! Candidate scoring and selection
//!
//! EXPLORE scores a word by how common its distinct letters are across the current
//! candidates; GUESS scores it by its corpus frequency weight. Selection keeps the first
//! candidate with the strictly highest score, so results are deterministic.

use super::Mode;
use crate::core::{Word, checked_letter_index, letter_index};
use crate::wordlists::FrequencyTable;

const VOWELS: &[u8] = b"aeiou";

/// Per-letter document frequency over a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScores([f64; 26]);

impl LetterScores {
    /// Count, for every letter, how many candidates contain it at least once
    ///
    /// Vowel counts are multiplied by `vowel_weight`.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::solver::LetterScores;
    /// use wordle_assistant::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["apple", "grape", "mango"]);
    /// let refs: Vec<_> = words.iter().collect();
    /// let scores = LetterScores::from_candidates(&refs, 1.0);
    ///
    /// assert_eq!(scores.get(b'a'), 3.0);
    /// assert_eq!(scores.get(b'p'), 2.0);
    /// ```
    #[must_use]
    pub fn from_candidates(candidates: &[&Word], vowel_weight: f64) -> Self {
        let mut scores = [0.0; 26];
        for word in candidates {
            for letter in word.distinct_letters() {
                scores[letter_index(letter)] += 1.0;
            }
        }
        for &vowel in VOWELS {
            scores[letter_index(vowel)] *= vowel_weight;
        }
        Self(scores)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> f64 {
        match checked_letter_index(letter) {
            Some(idx) => self.0[idx],
            None => 0.0,
        }
    }

    /// Sum of letter scores over the distinct letters of `word`
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.distinct_letters().map(|letter| self.get(letter)).sum()
    }
}

/// A candidate with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Scoring policy for one round
#[derive(Debug, Clone)]
pub enum Scorer<'f> {
    /// Letter document frequency over the round's candidates
    Explore(LetterScores),
    /// Corpus frequency weight; unknown words score zero
    Guess(&'f FrequencyTable),
}

impl<'f> Scorer<'f> {
    /// Prepare the scorer for `mode` over the round's candidates
    #[must_use]
    pub fn new(
        mode: Mode,
        candidates: &[&Word],
        frequencies: &'f FrequencyTable,
        vowel_weight: f64,
    ) -> Self {
        match mode {
            Mode::Explore => Self::Explore(LetterScores::from_candidates(candidates, vowel_weight)),
            Mode::Guess => Self::Guess(frequencies),
        }
    }

    /// Score of `word`; a NaN weight ranks below every real score
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let score = match self {
            Self::Explore(letters) => letters.score(word),
            Self::Guess(frequencies) => frequencies.weight(word.text()),
        };
        if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score
        }
    }

    /// Highest-scoring candidate; ties go to the earliest
    ///
    /// Returns `None` only for an empty candidate list.
    #[must_use]
    pub fn select_best<'a>(&self, candidates: &[&'a Word]) -> Option<ScoredWord<'a>> {
        let mut best: Option<ScoredWord<'a>> = None;
        for &word in candidates {
            let score = self.score(word);
            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredWord { word, score });
            }
        }
        best
    }

    /// All candidates ordered by descending score, ties in source order
    #[must_use]
    pub fn rank<'a>(&self, candidates: &[&'a Word]) -> Vec<ScoredWord<'a>> {
        let mut ranked: Vec<ScoredWord<'a>> = candidates
            .iter()
            .map(|&word| ScoredWord {
                word,
                score: self.score(word),
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn letter_scores_count_documents_not_occurrences() {
        let words = words_from_slice(&["apple", "grape", "mango"]);
        let scores = LetterScores::from_candidates(&refs(&words), 1.0);

        assert!((scores.get(b'a') - 3.0).abs() < f64::EPSILON);
        assert!((scores.get(b'p') - 2.0).abs() < f64::EPSILON);
        assert!((scores.get(b'o') - 1.0).abs() < f64::EPSILON);
        assert!(scores.get(b'z').abs() < f64::EPSILON);
    }

    #[test]
    fn word_score_sums_distinct_letters() {
        let words = words_from_slice(&["apple", "grape", "mango"]);
        let scores = LetterScores::from_candidates(&refs(&words), 1.0);

        // apple: a3 + p2 + l1 + e2 (p counted once)
        assert!((scores.score(&words[0]) - 8.0).abs() < f64::EPSILON);
        // grape: g2 + r1 + a3 + p2 + e2
        assert!((scores.score(&words[1]) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn explore_favours_words_with_common_letters() {
        let words = words_from_slice(&["apple", "grape", "mango"]);
        let candidates = refs(&words);
        let table = FrequencyTable::new();
        let scorer = Scorer::new(Mode::Explore, &candidates, &table, 1.0);

        let best = scorer.select_best(&candidates).unwrap();
        assert_eq!(best.word.text(), "grape");
        assert!(best.word.has_letter(b'a'));
    }

    #[test]
    fn more_common_letter_never_scores_lower() {
        let words = words_from_slice(&["eight", "event", "zebra", "oxide", "bevel"]);
        let candidates = refs(&words);
        let scores = LetterScores::from_candidates(&candidates, 1.0);
        assert!(scores.get(b'e') > scores.get(b'z'));

        let with_e = Word::new("baker").unwrap();
        let with_z = Word::new("bakzr").unwrap();
        assert!(scores.score(&with_e) >= scores.score(&with_z));
    }

    #[test]
    fn vowel_weight_scales_vowels_only() {
        let words = words_from_slice(&["apple", "grape", "mango"]);
        let scores = LetterScores::from_candidates(&refs(&words), 0.5);

        assert!((scores.get(b'a') - 1.5).abs() < f64::EPSILON);
        assert!((scores.get(b'p') - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn guess_uses_frequency_weight() {
        let words = words_from_slice(&["quest", "query", "quilt"]);
        let candidates = refs(&words);
        let table: FrequencyTable = [("query", 100.0), ("quest", 50.0)].into_iter().collect();
        let scorer = Scorer::new(Mode::Guess, &candidates, &table, 1.0);

        let best = scorer.select_best(&candidates).unwrap();
        assert_eq!(best.word.text(), "query");
        assert!(scorer.score(&words[2]).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let words = words_from_slice(&["alpha", "bravo", "delta"]);
        let candidates = refs(&words);
        let table = FrequencyTable::new();
        let scorer = Scorer::new(Mode::Guess, &candidates, &table, 1.0);

        // all unknown, all zero
        assert_eq!(scorer.select_best(&candidates).unwrap().word.text(), "alpha");
    }

    #[test]
    fn select_best_empty_is_none() {
        let table = FrequencyTable::new();
        let scorer = Scorer::new(Mode::Explore, &[], &table, 1.0);
        assert!(scorer.select_best(&[]).is_none());
    }

    #[test]
    fn selected_word_is_a_candidate() {
        let words = words_from_slice(&["crane", "slate", "pilot", "mound"]);
        let candidates = refs(&words);
        let table: FrequencyTable = [("pilot", 3.0), ("zzzzz", 99.0)].into_iter().collect();

        for mode in [Mode::Explore, Mode::Guess] {
            let scorer = Scorer::new(mode, &candidates, &table, 1.0);
            let best = scorer.select_best(&candidates).unwrap();
            assert!(candidates.contains(&best.word));
        }
    }

    #[test]
    fn nan_weight_never_wins() {
        let words = words_from_slice(&["quest", "query"]);
        let candidates = refs(&words);
        let table: FrequencyTable = [("quest", f64::NAN), ("query", 100f64.ln())]
            .into_iter()
            .collect();
        let scorer = Scorer::new(Mode::Guess, &candidates, &table, 1.0);

        assert_eq!(scorer.select_best(&candidates).unwrap().word.text(), "query");
        assert_eq!(scorer.rank(&candidates)[1].word.text(), "quest");
    }

    #[test]
    fn rank_orders_by_score_then_source() {
        let words = words_from_slice(&["alpha", "bravo", "delta", "gamma"]);
        let candidates = refs(&words);
        let table: FrequencyTable = [("delta", 5.0), ("bravo", 5.0), ("gamma", 9.0)]
            .into_iter()
            .collect();
        let scorer = Scorer::new(Mode::Guess, &candidates, &table, 1.0);

        let order: Vec<&str> = scorer
            .rank(&candidates)
            .iter()
            .map(|s| s.word.text())
            .collect();
        assert_eq!(order, vec!["gamma", "bravo", "delta", "alpha"]);
    }
}
