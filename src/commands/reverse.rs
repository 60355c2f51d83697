//! Reverse mode
//!
//! Recovers the hidden word from the colored hint grids other players share, without
//! knowing which words they guessed. An answer survives a hint when at least one word in
//! the guess list would have produced exactly that hint against it.

use crate::core::{Feedback, Word};
use colored::Colorize;
use rayon::prelude::*;
use std::io::{BufRead, Write};

/// Narrows an answer list with anonymous hints
pub struct ReverseSolver<'a> {
    guesses: &'a [Word],
    candidates: Vec<&'a Word>,
    applied: Vec<(Feedback, usize)>,
}

impl<'a> ReverseSolver<'a> {
    /// Start with every word of `answers` as a candidate
    #[must_use]
    pub fn new(answers: &'a [Word], guesses: &'a [Word]) -> Self {
        Self {
            guesses,
            candidates: answers.iter().collect(),
            applied: Vec::new(),
        }
    }

    /// Keep candidates for which some guess yields `hint`; returns the remaining count
    ///
    /// An all-exact hint says nothing about the answer and is ignored.
    pub fn apply(&mut self, hint: Feedback) -> usize {
        if hint.is_solved() {
            return self.candidates.len();
        }

        let guesses = self.guesses;
        self.candidates = self
            .candidates
            .par_iter()
            .filter(|&&answer| {
                guesses
                    .iter()
                    .any(|guess| Feedback::calculate(guess, answer) == hint)
            })
            .copied()
            .collect();

        self.applied.push((hint, self.candidates.len()));
        self.candidates.len()
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Hints applied so far with the candidate count after each
    #[must_use]
    pub fn applied(&self) -> &[(Feedback, usize)] {
        &self.applied
    }
}

/// Read hints line by line until `end` or end of input, reporting progress to `output`
///
/// Blank lines and all-exact hints are skipped; `show` lists the current candidates.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_reverse<R: BufRead, W: Write>(
    answers: &[Word],
    guesses: &[Word],
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Vec<String>> {
    let mut solver = ReverseSolver::new(answers, guesses);
    writeln!(
        output,
        "Enter shared hints one per line (g/y/b or colored squares), 'show' to list, 'end' to finish."
    )?;

    let mut line = String::new();
    loop {
        write!(output, "Next hint: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim().to_lowercase();

        match entry.as_str() {
            "" => {}
            "end" => break,
            "show" => {
                for word in solver.candidates().iter().take(50) {
                    writeln!(output, "  {}", word.text().to_uppercase())?;
                }
            }
            _ => match Feedback::parse(&entry) {
                Ok(hint) if hint.is_solved() => {}
                Ok(hint) => {
                    let remaining = solver.apply(hint);
                    writeln!(output, "{hint} {remaining}")?;
                }
                Err(e) => writeln!(output, "{}", e.to_string().red())?,
            },
        }
    }

    let summary: Vec<String> = solver
        .applied()
        .iter()
        .map(|(hint, remaining)| format!("{hint} {remaining}"))
        .collect();

    writeln!(output, "Reverse Wordle {}", summary.len())?;
    for entry in &summary {
        writeln!(output, "{entry}")?;
    }
    if solver.candidates().len() <= 10 {
        for word in solver.candidates() {
            writeln!(output, "  {}", word.text().to_uppercase().bright_green())?;
        }
    }

    Ok(summary)
}
