//! Core domain types for the assistant
//!
//! Words, per-position feedback and the accumulated constraint snapshot. Everything here is
//! pure and cheap to copy, so sessions can keep a history of snapshots for replay.

mod constraints;
mod feedback;
mod letter_set;
mod word;

pub use constraints::ConstraintState;
pub use feedback::{Feedback, Hint};
pub use letter_set::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError, checked_letter_index, letter_index};
