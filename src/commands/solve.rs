//! Word solving command
//!
//! Plays a session against a known target, generating the feedback the game would give.

use crate::core::{Feedback, Word};
use crate::error::AssistantError;
use crate::solver::{AssistantConfig, Mode, Session, SessionStatus};
use crate::wordlists::FrequencyTable;

/// Configuration for solving a word
///
/// The round limit comes from `AssistantConfig::max_rounds`.
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<SolveStep>,
    pub status: SessionStatus,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.status, SessionStatus::Solved { .. })
    }
}

/// A single round of the simulated game
pub struct SolveStep {
    pub word: String,
    pub feedback: Feedback,
    pub mode: Mode,
    pub candidates: usize,
}

/// Solve `config.target` with a fresh session over `words`
///
/// A target missing from `words` is still played; the session will end `Exhausted`.
/// Running out of `assistant.max_rounds` aborts the session.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The word list or frequency table is empty
pub fn solve_word(
    config: &SolveConfig,
    words: &[Word],
    frequencies: &FrequencyTable,
    assistant: AssistantConfig,
) -> Result<SolveResult, AssistantError> {
    let target = Word::new(config.target.as_str())?;
    let mut session = Session::new(words, frequencies, assistant)?;
    let mut steps = Vec::new();

    while session.round() < assistant.max_rounds {
        let guess = match session.next_guess() {
            Ok(guess) => guess,
            Err(AssistantError::NoCandidates) => break,
            Err(e) => return Err(e),
        };

        let feedback = Feedback::calculate(guess.word, &target);
        steps.push(SolveStep {
            word: guess.word.text().to_string(),
            feedback,
            mode: guess.mode,
            candidates: guess.candidates,
        });

        if session.submit_feedback(&feedback.to_string())?.is_terminal() {
            break;
        }
    }

    let status = session.abort();
    Ok(SolveResult {
        target: target.text().to_string(),
        steps,
        status,
    })
}
