//! Per-position feedback for a guess
//!
//! The game answers every guess with one hint per position:
//! - `g` = Exact (letter in the correct position)
//! - `y` = Present (letter in the word, wrong position)
//! - `b` = Absent (letter not in the word, subject to repeated letters)

use super::word::{WORD_LENGTH, Word, letter_index};
use crate::error::{AssistantError, Result};
use std::fmt;
use std::str::FromStr;

/// Hint for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Exact,
    Present,
    Absent,
}

impl Hint {
    /// Parse a single feedback symbol
    ///
    /// Accepts `g`/`y`/`b` in either case, `-`/`_` for absent, and the colored squares
    /// people paste from shared results.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Exact),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical single-letter symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one hint per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Hint; WORD_LENGTH]);

impl Feedback {
    /// All exact (the guess was the answer)
    pub const SOLVED: Self = Self([Hint::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(hints: [Hint; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    /// Parse a feedback string such as `"gybbg"`
    ///
    /// # Errors
    /// Returns `AssistantError::InvalidFeedback` when the string does not hold exactly five
    /// symbols or contains a symbol outside the accepted set.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Hint};
    ///
    /// let fb = Feedback::parse("gybbg").unwrap();
    /// assert_eq!(fb.hint(1), Hint::Present);
    /// assert!(Feedback::parse("ggg").is_err());
    /// assert!(Feedback::parse("ggxgg").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let symbols: Vec<char> = input.trim().chars().collect();

        if symbols.len() != WORD_LENGTH {
            return Err(AssistantError::invalid_feedback(format!(
                "expected {WORD_LENGTH} symbols, got {}",
                symbols.len()
            )));
        }

        let mut hints = [Hint::Absent; WORD_LENGTH];
        for (slot, &symbol) in hints.iter_mut().zip(&symbols) {
            *slot = Hint::from_symbol(symbol).ok_or_else(|| {
                AssistantError::invalid_feedback(format!(
                    "unrecognized symbol '{symbol}' (use g, y or b)"
                ))
            })?;
        }

        Ok(Self(hints))
    }

    /// Feedback the game would give when `guess` is played against `answer`
    ///
    /// Greens are assigned first and consume their letter; yellows are then handed out
    /// left to right while unconsumed copies of the letter remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "bbybb");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut hints = [Hint::Absent; WORD_LENGTH];
        let mut available = *answer.letter_counts();

        for (i, hint) in hints.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *hint = Hint::Exact;
                available[letter_index(letter)] -= 1;
            }
        }

        for (i, hint) in hints.iter_mut().enumerate() {
            if *hint == Hint::Exact {
                continue;
            }
            let slot = &mut available[letter_index(guess.char_at(i))];
            if *slot > 0 {
                *hint = Hint::Present;
                *slot -= 1;
            }
        }

        Self(hints)
    }

    /// Hint at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn hint(&self, position: usize) -> Hint {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[Hint; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&h| h == Hint::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&h| h == Hint::Exact).count()
    }

    /// Render as colored squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|h| h.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.0 {
            write!(f, "{}", hint.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn parse_valid_symbols() {
        let fb = Feedback::parse("gybbg").unwrap();
        assert_eq!(
            fb.hints(),
            &[
                Hint::Exact,
                Hint::Present,
                Hint::Absent,
                Hint::Absent,
                Hint::Exact
            ]
        );
    }

    #[test]
    fn parse_accepts_uppercase_and_emoji() {
        let plain = Feedback::parse("gybbg").unwrap();
        assert_eq!(Feedback::parse("GYBBG").unwrap(), plain);
        assert_eq!(Feedback::parse("🟩🟨⬛⬜🟩").unwrap(), plain);
        assert_eq!(Feedback::parse("gy--g").unwrap(), plain);
        assert_eq!(Feedback::parse("  gybbg\n").unwrap(), plain);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            Feedback::parse("ggg"),
            Err(AssistantError::InvalidFeedback { .. })
        ));
        assert!(Feedback::parse("gggggg").is_err());
        assert!(Feedback::parse("").is_err());
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        assert!(matches!(
            Feedback::parse("ggxgg"),
            Err(AssistantError::InvalidFeedback { .. })
        ));
    }

    #[test]
    fn solved_detection() {
        assert!(Feedback::parse("ggggg").unwrap().is_solved());
        assert!(Feedback::SOLVED.is_solved());
        assert!(!Feedback::parse("ggggy").unwrap().is_solved());
        assert_eq!(Feedback::parse("gbgyb").unwrap().count_exact(), 2);
    }

    #[test]
    fn calculate_all_absent_and_all_exact() {
        assert_eq!(
            Feedback::calculate(&word("mound"), &word("apple")).to_string(),
            "bbbbb"
        );
        assert_eq!(
            Feedback::calculate(&word("apple"), &word("apple")),
            Feedback::SOLVED
        );
    }

    #[test]
    fn calculate_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            Feedback::calculate(&word("robot"), &word("floor")).to_string(),
            "yybgb"
        );
    }

    #[test]
    fn calculate_surplus_copies_are_absent() {
        // Only one E in CRANE; the first E gets the yellow
        assert_eq!(
            Feedback::calculate(&word("speed"), &word("crane")).to_string(),
            "bbybb"
        );
    }

    #[test]
    fn display_and_emoji() {
        let fb = Feedback::parse("gyb--").unwrap();
        assert_eq!(fb.to_string(), "gybbb");
        assert_eq!(fb.to_emoji(), "🟩🟨⬜⬜⬜");
    }
}
