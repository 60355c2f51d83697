//! Display functions for session rounds and command results

use super::formatters::{colored_tiles, create_progress_bar, letter_list};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{ConstraintState, Word};
use crate::solver::{Mode, SessionStatus, Suggestion};
use colored::Colorize;
use std::io::{self, Write};

/// Print the guess for a round, with the shortlist when it is small
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_suggestion<W: Write>(
    out: &mut W,
    round: usize,
    suggestion: &Suggestion<'_>,
    shortlist: &[&Word],
) -> io::Result<()> {
    let mode = match suggestion.mode {
        Mode::Explore => suggestion.mode.to_string().bright_blue(),
        Mode::Guess => suggestion.mode.to_string().bright_magenta(),
    };

    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Round {round} [{mode}] {} candidates",
        suggestion.candidates
    )?;
    writeln!(
        out,
        "Guess: {}  (score {:.2})",
        suggestion.word.text().to_uppercase().bright_yellow().bold(),
        suggestion.score
    )?;

    if !shortlist.is_empty() {
        let names: Vec<String> = shortlist.iter().map(|w| w.text().to_uppercase()).collect();
        writeln!(out, "Remaining: {}", names.join(" "))?;
    }
    Ok(())
}

/// Print what is known so far
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_constraints<W: Write>(out: &mut W, state: &ConstraintState) -> io::Result<()> {
    writeln!(
        out,
        "Known: {}  included: {}  ruled out: {}",
        state.exact_pattern().to_uppercase().green(),
        letter_list(state.included_letters().iter()).yellow(),
        letter_list(state.disallowed_letters().iter()).bright_black()
    )
}

/// Print the terminal status of a session
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_session_end<W: Write>(out: &mut W, status: &SessionStatus) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    match status {
        SessionStatus::Solved { word, rounds } => writeln!(
            out,
            "{} {} in {rounds} {}",
            "SOLVED".bright_green().bold(),
            word.to_uppercase().bright_white().bold(),
            if *rounds == 1 { "guess" } else { "guesses" }
        ),
        SessionStatus::Exhausted { rounds } => writeln!(
            out,
            "{} after {rounds} rounds: no word fits the feedback (inconsistent hints or unknown word)",
            "EXHAUSTED".red().bold()
        ),
        SessionStatus::Aborted { rounds } => {
            writeln!(out, "{} after {rounds} rounds", "ABORTED".yellow().bold())
        }
        SessionStatus::InProgress => writeln!(out, "{status}"),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let tiles = Word::new(step.word.as_str())
            .map(|w| colored_tiles(&w, &step.feedback))
            .unwrap_or_else(|_| step.word.clone());
        println!("\nRound {}: {tiles} {}", i + 1, step.feedback.to_emoji());

        if verbose {
            println!("  Mode:       {}", step.mode);
            println!("  Candidates: {}", step.candidates);
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved ({})", result.status).red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!("   Exhausted:        {}", result.exhausted);
    println!("   Out of rounds:    {}", result.failed);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses);
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<usize> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    for guess_count in rounds {
        let count = result.distribution[&guess_count];
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    #[test]
    fn session_end_messages() {
        let mut out = Vec::new();
        print_session_end(
            &mut out,
            &SessionStatus::Solved {
                word: "query".to_string(),
                rounds: 3,
            },
        )
        .unwrap();
        print_session_end(&mut out, &SessionStatus::Exhausted { rounds: 4 }).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("SOLVED"));
        assert!(text.contains("QUERY"));
        assert!(text.contains("in 3 guesses"));
        assert!(text.contains("EXHAUSTED"));
    }

    #[test]
    fn suggestion_lists_shortlist() {
        let word = Word::new("query").unwrap();
        let other = Word::new("quest").unwrap();
        let suggestion = Suggestion {
            word: &word,
            score: 4.5,
            mode: Mode::Guess,
            candidates: 2,
        };

        let mut out = Vec::new();
        print_suggestion(&mut out, 3, &suggestion, &[&word, &other]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Round 3"));
        assert!(text.contains("QUERY"));
        assert!(text.contains("QUERY QUEST"));
    }

    #[test]
    fn constraints_summary() {
        let state = ConstraintState::new()
            .with_feedback(&Word::new("qxzzz").unwrap(), &Feedback::parse("gbbbb").unwrap());

        let mut out = Vec::new();
        print_constraints(&mut out, &state).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Q...."));
        assert!(text.contains("X, Z"));
    }
}
