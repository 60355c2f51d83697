//! Wordle Assistant
//!
//! Suggests Wordle guesses with a two-mode heuristic: early rounds EXPLORE with words built
//! from letters not yet tried, later rounds GUESS the most frequent word that fits every hint.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_assistant::solver::{AssistantConfig, Session};
//! use wordle_assistant::wordlists::{FrequencyTable, loader::words_from_slice};
//!
//! let words = words_from_slice(&["query", "quest", "crane"]);
//! let freqs: FrequencyTable = [("query", 100.0), ("quest", 50.0)].into_iter().collect();
//!
//! let mut session = Session::new(&words, &freqs, AssistantConfig::default()).unwrap();
//! let guess = session.next_guess().unwrap();
//! println!("Try {} ({} candidates)", guess.word, guess.candidates);
//!
//! session.submit_feedback("gbbbb").unwrap();
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Filtering, scoring and the guess loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{AssistantError, Result};
