//! Accumulated knowledge about the hidden word
//!
//! A `ConstraintState` is an immutable snapshot: every round produces a new state from the
//! previous one plus that round's feedback. Information only accumulates.
//!
//! Besides the three classic collections (exact matches, included letters, disallowed
//! letters) the state keeps per-letter occurrence bounds, so repeated letters in a guess
//! are modelled per occurrence instead of as a single present/absent flag.

use super::feedback::{Feedback, Hint};
use super::letter_set::LetterSet;
use super::word::{WORD_LENGTH, Word, checked_letter_index, letter_index};
use crate::error::Result;
use log::debug;

/// Everything learned from the feedback seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintState {
    exact_matches: [Option<u8>; WORD_LENGTH],
    included_letters: LetterSet,
    disallowed_letters: LetterSet,
    /// Minimum number of occurrences per letter
    min_counts: [u8; 26],
    /// Exact occurrence count, once a round marks surplus copies absent
    max_counts: [Option<u8>; 26],
    /// Bit `i` set when the letter is known not to sit at position `i`
    excluded_positions: [u8; 26],
}

impl ConstraintState {
    /// Empty state for a new session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a raw feedback string for `guess` into a new snapshot
    ///
    /// # Errors
    /// Returns `AssistantError::InvalidFeedback` if the feedback does not hold exactly one
    /// `g`/`y`/`b` symbol per letter of the guess. `self` is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{ConstraintState, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let state = ConstraintState::new().update(&guess, "gybbb").unwrap();
    ///
    /// assert_eq!(state.exact_matches()[0], Some(b'c'));
    /// assert!(state.included_letters().contains(b'r'));
    /// assert!(state.disallowed_letters().contains(b'n'));
    /// assert!(ConstraintState::new().update(&guess, "ggg").is_err());
    /// ```
    pub fn update(&self, guess: &Word, feedback: &str) -> Result<Self> {
        let feedback = Feedback::parse(feedback)?;
        Ok(self.with_feedback(guess, &feedback))
    }

    /// Merge already-parsed feedback for `guess` into a new snapshot
    #[must_use]
    pub fn with_feedback(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = *self;

        // Copies of each letter the round marked green or yellow
        let mut marked = [0u8; 26];
        let mut has_absent = [false; 26];
        for (i, &hint) in feedback.hints().iter().enumerate() {
            let idx = letter_index(guess.char_at(i));
            match hint {
                Hint::Exact | Hint::Present => marked[idx] += 1,
                Hint::Absent => has_absent[idx] = true,
            }
        }

        for (i, &hint) in feedback.hints().iter().enumerate() {
            let letter = guess.char_at(i);
            let idx = letter_index(letter);
            match hint {
                Hint::Exact => {
                    next.exact_matches[i] = Some(letter);
                    next.disallowed_letters.remove(letter);
                }
                Hint::Present => {
                    next.included_letters.insert(letter);
                    next.disallowed_letters.remove(letter);
                    next.excluded_positions[idx] |= 1 << i;
                }
                Hint::Absent => {
                    next.excluded_positions[idx] |= 1 << i;
                    let seen_elsewhere = marked[idx] > 0
                        || next.included_letters.contains(letter)
                        || next.exact_matches.contains(&Some(letter));
                    if !seen_elsewhere {
                        next.disallowed_letters.insert(letter);
                    }
                }
            }
        }

        for idx in 0..26 {
            let pinned = next
                .exact_matches
                .iter()
                .filter(|&&slot| slot.is_some_and(|l| letter_index(l) == idx))
                .count() as u8;
            next.min_counts[idx] = next.min_counts[idx].max(marked[idx]).max(pinned);
            if has_absent[idx] {
                next.max_counts[idx] = Some(
                    next.max_counts[idx].map_or(marked[idx], |known| known.min(marked[idx])),
                );
            }
        }

        debug!(
            "{guess} {feedback}: exact={} included={} disallowed={}",
            next.exact_pattern(),
            next.included_letters,
            next.disallowed_letters
        );

        next
    }

    /// Confirmed letter per position
    #[inline]
    #[must_use]
    pub const fn exact_matches(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.exact_matches
    }

    #[inline]
    #[must_use]
    pub const fn included_letters(&self) -> LetterSet {
        self.included_letters
    }

    #[inline]
    #[must_use]
    pub const fn disallowed_letters(&self) -> LetterSet {
        self.disallowed_letters
    }

    /// Number of positions with a confirmed letter
    #[must_use]
    pub fn known_exact_count(&self) -> usize {
        self.exact_matches.iter().flatten().count()
    }

    /// Letters appearing in any of the three collections
    #[must_use]
    pub fn tried_letters(&self) -> LetterSet {
        self.exact_matches
            .iter()
            .flatten()
            .copied()
            .collect::<LetterSet>()
            .union(self.included_letters)
            .union(self.disallowed_letters)
    }

    #[inline]
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        match checked_letter_index(letter) {
            Some(idx) => self.min_counts[idx],
            None => 0,
        }
    }

    /// Known upper bound on occurrences; a non-letter can never occur
    #[inline]
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> Option<u8> {
        match checked_letter_index(letter) {
            Some(idx) => self.max_counts[idx],
            None => Some(0),
        }
    }

    /// True when `letter` is known not to be at `position`
    #[inline]
    #[must_use]
    pub const fn is_excluded_at(&self, letter: u8, position: usize) -> bool {
        match checked_letter_index(letter) {
            Some(idx) => self.excluded_positions[idx] & (1 << position) != 0,
            None => false,
        }
    }

    /// Check a word against the per-occurrence bounds
    ///
    /// Occurrence counts must lie within `[min_count, max_count]` and no letter may sit at a
    /// position where it was already reported yellow or surplus.
    #[must_use]
    pub fn satisfies_counts(&self, word: &Word) -> bool {
        let counts = word.letter_counts();
        let counts_ok = (0..26).all(|idx| {
            counts[idx] >= self.min_counts[idx]
                && self.max_counts[idx].is_none_or(|max| counts[idx] <= max)
        });

        counts_ok
            && word.chars().iter().enumerate().all(|(i, &letter)| {
                self.exact_matches[i] == Some(letter) || !self.is_excluded_at(letter, i)
            })
    }

    /// Positional summary such as `q.e..`, used in logs
    #[must_use]
    pub fn exact_pattern(&self) -> String {
        self.exact_matches
            .iter()
            .map(|slot| slot.map_or('.', char::from))
            .collect()
    }
}
