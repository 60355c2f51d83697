//! Strategy phase selection
//!
//! EXPLORE spends guesses on untried letters; GUESS goes for the most likely answer.

use super::AssistantConfig;
use crate::core::ConstraintState;
use std::fmt;

/// Strategy phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Explore,
    Guess,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explore => write!(f, "EXPLORE"),
            Self::Guess => write!(f, "GUESS"),
        }
    }
}

/// Decides the phase from how much has been learned
///
/// EXPLORE holds while fewer than `explore_rounds` rounds were played and fewer than
/// `exact_threshold` positions are confirmed; either limit switches to GUESS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelector {
    pub explore_rounds: usize,
    pub exact_threshold: usize,
}

impl ModeSelector {
    #[must_use]
    pub const fn new(explore_rounds: usize, exact_threshold: usize) -> Self {
        Self {
            explore_rounds,
            exact_threshold,
        }
    }

    #[must_use]
    pub const fn from_config(config: &AssistantConfig) -> Self {
        Self::new(config.explore_rounds, config.exact_threshold)
    }

    #[must_use]
    pub fn select(&self, state: &ConstraintState, round: usize) -> Mode {
        if round >= self.explore_rounds || state.known_exact_count() >= self.exact_threshold {
            Mode::Guess
        } else {
            Mode::Explore
        }
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn starts_in_explore() {
        let selector = ModeSelector::default();
        assert_eq!(selector.select(&ConstraintState::new(), 0), Mode::Explore);
        assert_eq!(selector.select(&ConstraintState::new(), 1), Mode::Explore);
    }

    #[test]
    fn switches_after_explore_rounds() {
        let selector = ModeSelector::new(2, 2);
        assert_eq!(selector.select(&ConstraintState::new(), 2), Mode::Guess);
        assert_eq!(selector.select(&ConstraintState::new(), 5), Mode::Guess);
    }

    #[test]
    fn switches_on_exact_threshold() {
        let selector = ModeSelector::new(10, 2);
        let guess = Word::new("crane").unwrap();

        let one = ConstraintState::new().update(&guess, "gbbbb").unwrap();
        assert_eq!(selector.select(&one, 1), Mode::Explore);

        let two = ConstraintState::new().update(&guess, "gbbbg").unwrap();
        assert_eq!(selector.select(&two, 1), Mode::Guess);
    }

    #[test]
    fn zero_explore_rounds_always_guesses() {
        let selector = ModeSelector::new(0, 5);
        assert_eq!(selector.select(&ConstraintState::new(), 0), Mode::Guess);
    }

    #[test]
    fn display_names() {
        assert_eq!(Mode::Explore.to_string(), "EXPLORE");
        assert_eq!(Mode::Guess.to_string(), "GUESS");
    }
}
