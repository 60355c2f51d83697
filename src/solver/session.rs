//! Guess loop state machine
//!
//! A session walks `INIT → ROUND → {ROUND, SOLVED, EXHAUSTED, ABORTED}`. Each round picks a
//! mode, filters the word list, scores the survivors and emits the best word; feedback for
//! that word either ends the session or produces the next constraint snapshot.

use super::{AssistantConfig, CandidateFilter, Mode, ModeSelector, Scorer};
use crate::core::{ConstraintState, Feedback, Word};
use crate::error::{AssistantError, Result};
use crate::wordlists::FrequencyTable;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    /// All-exact feedback received for `word`
    Solved { word: String, rounds: usize },
    /// The candidate filter came back empty
    Exhausted { rounds: usize },
    Aborted { rounds: usize },
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "IN PROGRESS"),
            Self::Solved { word, rounds } => write!(f, "SOLVED {word} in {rounds}"),
            Self::Exhausted { rounds } => write!(f, "EXHAUSTED after {rounds}"),
            Self::Aborted { rounds } => write!(f, "ABORTED after {rounds}"),
        }
    }
}

/// The guess emitted for the current round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub word: &'a Word,
    pub score: f64,
    pub mode: Mode,
    /// Size of the candidate set the word was picked from
    pub candidates: usize,
}

/// One completed round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub guess: Word,
    pub feedback: Feedback,
    pub mode: Mode,
    pub candidates: usize,
    /// Constraint snapshot after merging this round
    pub state: ConstraintState,
}

/// An interactive solving session over a fixed word list
pub struct Session<'a> {
    words: &'a [Word],
    frequencies: &'a FrequencyTable,
    config: AssistantConfig,
    selector: ModeSelector,
    state: ConstraintState,
    round: usize,
    rejected: FxHashSet<&'a str>,
    pending: Option<Suggestion<'a>>,
    history: Vec<RoundRecord>,
    status: SessionStatus,
}

impl<'a> Session<'a> {
    /// Start a session
    ///
    /// # Errors
    /// Returns `AssistantError::InvalidConfiguration` when the word list or frequency table
    /// is empty, or the config fails validation.
    pub fn new(
        words: &'a [Word],
        frequencies: &'a FrequencyTable,
        config: AssistantConfig,
    ) -> Result<Self> {
        if words.is_empty() {
            return Err(AssistantError::InvalidConfiguration(
                "word list is empty".to_string(),
            ));
        }
        if frequencies.is_empty() {
            return Err(AssistantError::InvalidConfiguration(
                "frequency table is empty".to_string(),
            ));
        }
        config.validate()?;

        Ok(Self {
            words,
            frequencies,
            config,
            selector: ModeSelector::from_config(&config),
            state: ConstraintState::new(),
            round: 0,
            rejected: FxHashSet::default(),
            pending: None,
            history: Vec::new(),
            status: SessionStatus::InProgress,
        })
    }

    /// Guess for the current round
    ///
    /// Repeated calls without feedback return the same suggestion.
    ///
    /// # Errors
    /// - `AssistantError::SessionFinished` once the session reached a terminal state
    /// - `AssistantError::NoCandidates` when nothing survives the filter; the session is
    ///   then `Exhausted`
    pub fn next_guess(&mut self) -> Result<Suggestion<'a>> {
        if self.status.is_terminal() {
            return Err(AssistantError::SessionFinished);
        }
        if let Some(pending) = self.pending {
            return Ok(pending);
        }

        let suggestion = self.plan_round()?;
        self.pending = Some(suggestion);
        Ok(suggestion)
    }

    /// Merge feedback for the pending guess
    ///
    /// Malformed feedback leaves the round untouched so the caller can resupply it.
    ///
    /// # Errors
    /// - `AssistantError::InvalidFeedback` for a malformed feedback string
    /// - `AssistantError::NoPendingGuess` if `next_guess` has not been called this round
    /// - `AssistantError::SessionFinished` after a terminal state
    pub fn submit_feedback(&mut self, feedback: &str) -> Result<SessionStatus> {
        if self.status.is_terminal() {
            return Err(AssistantError::SessionFinished);
        }
        let pending = self.pending.ok_or(AssistantError::NoPendingGuess)?;
        let feedback = Feedback::parse(feedback)?;

        self.pending = None;
        self.round += 1;

        if feedback.is_solved() {
            info!("Solved: {} in {} rounds", pending.word, self.round);
            self.status = SessionStatus::Solved {
                word: pending.word.text().to_string(),
                rounds: self.round,
            };
        } else {
            self.state = self.state.with_feedback(pending.word, &feedback);
        }

        self.history.push(RoundRecord {
            guess: pending.word.clone(),
            feedback,
            mode: pending.mode,
            candidates: pending.candidates,
            state: self.state,
        });

        if !self.status.is_terminal() {
            match self.plan_round() {
                Ok(next) => self.pending = Some(next),
                Err(AssistantError::NoCandidates) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(self.status.clone())
    }

    /// Drop the pending guess because the game refused it as "not a word"
    ///
    /// The word is never suggested again. The round does not advance.
    ///
    /// # Errors
    /// Returns `AssistantError::NoPendingGuess` or `AssistantError::SessionFinished`.
    pub fn reject_guess(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(AssistantError::SessionFinished);
        }
        let pending = self.pending.take().ok_or(AssistantError::NoPendingGuess)?;
        debug!("Rejected guess: {}", pending.word);
        self.rejected.insert(pending.word.text());
        Ok(())
    }

    /// Stop the session at the caller's request
    pub fn abort(&mut self) -> SessionStatus {
        if !self.status.is_terminal() {
            self.pending = None;
            self.status = SessionStatus::Aborted { rounds: self.round };
        }
        self.status.clone()
    }

    /// Words surviving the filter for `mode`, excluding rejected guesses
    #[must_use]
    pub fn candidates(&self, mode: Mode) -> Vec<&'a Word> {
        CandidateFilter::new(&self.state, mode)
            .apply(self.words)
            .into_iter()
            .filter(|word| !self.rejected.contains(word.text()))
            .collect()
    }

    /// Mode the selector picks for the current round
    #[must_use]
    pub fn current_mode(&self) -> Mode {
        self.selector.select(&self.state, self.round)
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Rounds with accepted feedback so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn status(&self) -> &SessionStatus {
        &self.status
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Run mode selection, filtering and scoring for the current round
    fn plan_round(&mut self) -> Result<Suggestion<'a>> {
        let mut mode = self.current_mode();
        let mut candidates = self.candidates(mode);

        if candidates.is_empty() && mode == Mode::Explore {
            debug!("No untried-letter words left, falling back to GUESS");
            mode = Mode::Guess;
            candidates = self.candidates(mode);
        }

        debug!(
            "Round {}: {mode} {} -> {} candidates",
            self.round + 1,
            CandidateFilter::new(&self.state, mode),
            candidates.len()
        );

        let scorer = Scorer::new(mode, &candidates, self.frequencies, self.config.vowel_weight);
        let Some(best) = scorer.select_best(&candidates) else {
            warn!("No candidates remain after {} rounds", self.round);
            self.status = SessionStatus::Exhausted { rounds: self.round };
            return Err(AssistantError::NoCandidates);
        };

        Ok(Suggestion {
            word: best.word,
            score: best.score,
            mode,
            candidates: candidates.len(),
        })
    }
}
