//! Dictionary word representation
//!
//! A Word stores a validated 5-letter lowercase word with a per-letter occurrence table,
//! so the filter and scorer never have to rescan the text.

use std::fmt;

/// Number of letters in every word the assistant handles
pub const WORD_LENGTH: usize = 5;

/// Index of a lowercase ASCII letter in a 26-slot table
///
/// # Panics
/// Panics (in debug builds) or returns an out-of-range index for bytes below `b'a'`.
/// Use [`checked_letter_index`] for input that may be upper case or not a letter.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Index of an ASCII letter of either case, or `None` for any other byte
#[inline]
#[must_use]
pub const fn checked_letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some(letter_index(letter.to_ascii_lowercase()))
    } else {
        None
    }
}

/// A 5-letter word with letter occurrence tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    /// assert_eq!(word.count_of(b'p'), 2);
    ///
    /// assert!(Word::new("bananas").is_err());
    /// assert!(Word::new("m4ngo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        let mut counts = [0u8; 26];
        for &ch in &chars {
            counts[letter_index(ch)] += 1;
        }

        Ok(Self {
            text,
            chars,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Number of times `letter` occurs in the word; any case, zero for non-letters
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> u8 {
        match checked_letter_index(letter) {
            Some(idx) => self.counts[idx],
            None => 0,
        }
    }

    /// Occurrence table indexed by `letter_index`
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; 26] {
        &self.counts
    }

    /// Distinct letters of the word in alphabetical order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.has_letter(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
