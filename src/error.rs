//! Error types surfaced by the assistant

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by constraint updates, sessions and loaders
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Feedback string had the wrong length or an unknown symbol
    #[error("invalid feedback: {reason}")]
    InvalidFeedback { reason: String },

    /// The candidate filter produced an empty set
    #[error("no candidate words remain; feedback may be inconsistent or the word is not in the dictionary")]
    NoCandidates,

    /// Word list or frequency table unusable at construction
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Feedback or guess requested after a terminal state
    #[error("session already finished")]
    SessionFinished,

    /// Feedback supplied before a guess was issued
    #[error("no guess is awaiting feedback")]
    NoPendingGuess,

    #[error("failed to read word data: {0}")]
    Io(#[from] std::io::Error),
}

impl AssistantError {
    pub(crate) fn invalid_feedback(reason: impl Into<String>) -> Self {
        Self::InvalidFeedback {
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AssistantError>;
