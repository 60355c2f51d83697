//! Compact set of lowercase ASCII letters
//!
//! Stored as a 26-bit mask so constraint snapshots stay `Copy`.

use super::word::checked_letter_index;
use std::fmt;

/// Set of letters `a..=z`, iterated in alphabetical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Add an ASCII letter of either case; other bytes are ignored
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    const fn bit(letter: u8) -> u32 {
        match checked_letter_index(letter) {
            Some(idx) => 1 << idx,
            None => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'q');
        set.insert(b'a');
        set.insert(b'q');
        assert!(set.contains(b'q'));
        assert!(set.contains(b'a'));
        assert!(!set.contains(b'z'));
        assert_eq!(set.len(), 2);

        set.remove(b'q');
        assert!(!set.contains(b'q'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn upper_case_and_non_letters() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'Q');
        set.insert(b'7');

        assert!(set.contains(b'q'));
        assert!(set.contains(b'Q'));
        assert!(!set.contains(b'A'));
        assert!(!set.contains(b'7'));
        assert_eq!(set.len(), 1);

        set.remove(b'Q');
        assert!(set.is_empty());
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz".to_vec());
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn union_and_subset() {
        let xz: LetterSet = b"xz".iter().copied().collect();
        let q: LetterSet = b"q".iter().copied().collect();
        let all = xz.union(q);

        assert_eq!(all.to_string(), "qxz");
        assert!(xz.is_subset(all));
        assert!(!all.is_subset(xz));
        assert!(LetterSet::EMPTY.is_subset(q));
    }
}
