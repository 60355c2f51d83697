//! Word list and frequency table loading
//!
//! Reads plain text files: one word per line for word lists, `word count` pairs for
//! frequency data.

use super::FrequencyTable;
use crate::core::Word;
use crate::error::Result;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Keeps only 5-letter alphabetic entries (lowercased), dropping duplicates while
/// preserving the order of first appearance.
///
/// # Errors
///
/// Returns `AssistantError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_words_from_file;
///
/// let words = load_words_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let content = fs::read_to_string(&path)?;
    let words = parse_words(&content);
    info!(
        "Read {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Parse newline-separated words, skipping invalid and repeated entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "grape", "kiwi"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load a frequency table from a file of `word count` lines
///
/// When `valid_words` is given, only words in it are kept; raw web corpora are full of
/// misspellings and junk tokens.
///
/// # Errors
///
/// Returns `AssistantError::Io` if the file cannot be read or opened.
pub fn load_frequencies_from_file<P: AsRef<Path>>(
    path: P,
    valid_words: Option<&[Word]>,
) -> Result<FrequencyTable> {
    let content = fs::read_to_string(&path)?;
    let table = parse_frequencies(&content, valid_words);
    info!(
        "Read {} word frequencies from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Parse `word count` lines into a table of `ln(count)` weights
///
/// Counts are whole numbers. Blank lines, malformed lines, zero counts and words that are
/// not valid 5-letter words are skipped.
#[must_use]
pub fn parse_frequencies(content: &str, valid_words: Option<&[Word]>) -> FrequencyTable {
    let valid: Option<FxHashSet<&str>> =
        valid_words.map(|words| words.iter().map(Word::text).collect());

    let mut table = FrequencyTable::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let (Some(raw_word), Some(raw_count), None) = (fields.next(), fields.next(), fields.next())
        else {
            if !line.trim().is_empty() {
                skipped += 1;
            }
            continue;
        };

        let Ok(word) = Word::new(raw_word) else {
            skipped += 1;
            continue;
        };
        let Ok(count) = raw_count.parse::<u64>() else {
            skipped += 1;
            continue;
        };

        if count == 0 || valid.as_ref().is_some_and(|set| !set.contains(word.text())) {
            skipped += 1;
            continue;
        }

        table.insert(word.text(), (count as f64).ln());
    }

    debug!("Skipped {skipped} frequency lines");
    table
}
