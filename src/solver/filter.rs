//! Candidate filtering
//!
//! Turns a constraint snapshot into a per-position pattern and applies it to a word list.
//! Output keeps the order of the source list.

use super::Mode;
use crate::core::{ConstraintState, LetterSet, WORD_LENGTH, Word};
use std::fmt;

/// Allowed letters at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass {
    /// Exactly this letter
    Fixed(u8),
    /// Any letter outside the set
    AnyExcept(LetterSet),
}

impl PositionClass {
    #[inline]
    #[must_use]
    pub const fn allows(self, letter: u8) -> bool {
        match self {
            Self::Fixed(expected) => letter == expected,
            Self::AnyExcept(blocked) => !blocked.contains(letter),
        }
    }
}

/// Positional matcher built for one mode
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    mode: Mode,
    positions: [PositionClass; WORD_LENGTH],
    required: LetterSet,
    state: ConstraintState,
}

impl CandidateFilter {
    /// Build the matcher for `mode`
    ///
    /// - EXPLORE: every position rejects any letter already seen in the constraints, so
    ///   only words made entirely of untried letters survive.
    /// - GUESS: confirmed positions are fixed, all others reject disallowed letters; the
    ///   word must also contain every included letter and respect the occurrence bounds.
    #[must_use]
    pub fn new(state: &ConstraintState, mode: Mode) -> Self {
        let positions = match mode {
            Mode::Explore => [PositionClass::AnyExcept(state.tried_letters()); WORD_LENGTH],
            Mode::Guess => {
                let disallowed = state.disallowed_letters();
                let exact = *state.exact_matches();
                exact.map(|slot| {
                    slot.map_or(PositionClass::AnyExcept(disallowed), PositionClass::Fixed)
                })
            }
        };

        let required = match mode {
            Mode::Explore => LetterSet::EMPTY,
            Mode::Guess => state.included_letters(),
        };

        Self {
            mode,
            positions,
            required,
            state: *state,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn positions(&self) -> &[PositionClass; WORD_LENGTH] {
        &self.positions
    }

    /// Check a single word
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let pattern_ok = self
            .positions
            .iter()
            .zip(word.chars())
            .all(|(class, &letter)| class.allows(letter));

        if !pattern_ok {
            return false;
        }

        match self.mode {
            Mode::Explore => true,
            Mode::Guess => {
                self.required.iter().all(|letter| word.has_letter(letter))
                    && self.state.satisfies_counts(word)
            }
        }
    }

    /// Surviving words, in source order
    #[must_use]
    pub fn apply<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.iter().filter(|word| self.matches(word)).collect()
    }
}

/// Regex-like rendering, e.g. `^q[^xz][^xz][^xz][^xz]$ +u`
impl fmt::Display for CandidateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^")?;
        for class in &self.positions {
            match class {
                PositionClass::Fixed(letter) => write!(f, "{}", char::from(*letter))?,
                PositionClass::AnyExcept(blocked) if blocked.is_empty() => write!(f, ".")?,
                PositionClass::AnyExcept(blocked) => write!(f, "[^{blocked}]")?,
            }
        }
        write!(f, "$")?;
        if !self.required.is_empty() {
            write!(f, " +{}", self.required)?;
        }
        Ok(())
    }
}
