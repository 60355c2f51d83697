//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as colored tiles, one per letter, shaded by its hint
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.hints())
        .map(|(&letter, &hint)| tile(letter, hint).to_string())
        .collect()
}

fn tile(letter: u8, hint: Hint) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match hint {
        Hint::Exact => text.black().on_green().bold(),
        Hint::Present => text.black().on_yellow().bold(),
        Hint::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters of a set as an uppercase, comma-separated list, or `-` when empty
#[must_use]
pub fn letter_list(letters: impl Iterator<Item = u8>) -> String {
    let list: Vec<String> = letters
        .map(|l| char::from(l.to_ascii_uppercase()).to_string())
        .collect();
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join(", ")
    }
}
