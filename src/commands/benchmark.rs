//! Benchmark command
//!
//! Plays independent sessions against many target words and summarises the outcome.
//! Sessions run in parallel; each one is still a single-threaded guess loop.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{AssistantConfig, SessionStatus};
use crate::wordlists::FrequencyTable;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Out of rounds before solving
    pub failed: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Rounds needed → number of solved words
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from `words`
///
/// A seed makes the sample reproducible.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Run one session per target word
pub fn run_benchmark(
    words: &[Word],
    frequencies: &FrequencyTable,
    assistant: AssistantConfig,
    targets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<SessionStatus> = targets
        .par_iter()
        .map(|target| {
            let config = SolveConfig::new(target.text().to_string());
            let status = match solve_word(&config, words, frequencies, assistant) {
                Ok(result) => result.status,
                Err(e) => {
                    warn!("Benchmark session for {target} failed: {e}");
                    SessionStatus::Exhausted { rounds: 0 }
                }
            };
            pb.inc(1);
            status
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut exhausted = 0;
    let mut failed = 0;
    for outcome in &outcomes {
        match outcome {
            SessionStatus::Solved { rounds, .. } => {
                *distribution.entry(*rounds).or_insert(0) += 1;
            }
            SessionStatus::Exhausted { .. } => exhausted += 1,
            SessionStatus::Aborted { .. } | SessionStatus::InProgress => failed += 1,
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(rounds, n)| rounds * n).sum();
    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        exhausted,
        failed,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
