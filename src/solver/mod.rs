//! Candidate filtering, scoring and the guess loop
//!
//! Each round threads an explicit `Mode` through the filter and scorer, so the EXPLORE and
//! GUESS policies can be exercised independently.

mod config;
mod filter;
mod mode;
mod scorer;
mod session;

pub use config::AssistantConfig;
pub use filter::{CandidateFilter, PositionClass};
pub use mode::{Mode, ModeSelector};
pub use scorer::{LetterScores, ScoredWord, Scorer};
pub use session::{RoundRecord, Session, SessionStatus, Suggestion};
