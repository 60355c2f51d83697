//! Interactive CLI mode
//!
//! Suggests a word each round and reads the game's feedback back from the user.

use crate::core::Word;
use crate::error::AssistantError;
use crate::output::display::{print_constraints, print_session_end, print_suggestion};
use crate::solver::{AssistantConfig, Mode, Session, SessionStatus};
use crate::wordlists::FrequencyTable;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the interactive assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if the session cannot be created or terminal I/O fails.
pub fn run_simple(
    words: &[Word],
    frequencies: &FrequencyTable,
    config: AssistantConfig,
) -> anyhow::Result<SessionStatus> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_simple_with(words, frequencies, config, &mut input, &mut output)
}

/// Interactive loop over arbitrary input/output
///
/// Input per round is a feedback string (`g`/`y`/`b`), `win` for all green, `bad` when the
/// game refused the word, or `quit`. End of input aborts the session.
///
/// # Errors
///
/// Returns an error if the session cannot be created or I/O fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    words: &[Word],
    frequencies: &FrequencyTable,
    config: AssistantConfig,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SessionStatus> {
    let mut session = Session::new(words, frequencies, config)?;

    writeln!(output, "{}", "Wordle Assistant".bright_cyan().bold())?;
    writeln!(
        output,
        "After each guess type the feedback: g = green, y = yellow, b = grey."
    )?;
    writeln!(
        output,
        "Commands: 'win' if solved, 'bad' if the game rejected the word, 'quit' to stop.\n"
    )?;

    loop {
        let suggestion = match session.next_guess() {
            Ok(suggestion) => suggestion,
            Err(AssistantError::NoCandidates | AssistantError::SessionFinished) => break,
            Err(e) => return Err(e.into()),
        };

        let shortlist = if suggestion.mode == Mode::Guess && suggestion.candidates <= 10 {
            session.candidates(Mode::Guess)
        } else {
            Vec::new()
        };
        print_suggestion(output, session.round() + 1, &suggestion, &shortlist)?;

        loop {
            write!(output, "Feedback: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                session.abort();
                break;
            }

            match line.trim().to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    session.abort();
                    break;
                }
                "bad" => {
                    session.reject_guess()?;
                    writeln!(output, "Skipping {}.", suggestion.word.text().to_uppercase())?;
                    break;
                }
                "" => {}
                entry => {
                    let feedback = if entry == "win" { "ggggg" } else { entry };
                    match session.submit_feedback(feedback) {
                        Ok(SessionStatus::InProgress) => {
                            print_constraints(output, session.state())?;
                            break;
                        }
                        Ok(_) => break,
                        Err(e @ AssistantError::InvalidFeedback { .. }) => {
                            writeln!(output, "{}", e.to_string().red())?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }

        if session.status().is_terminal() {
            break;
        }
    }

    let status = session.status().clone();
    print_session_end(output, &status)?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn fixture() -> (Vec<Word>, FrequencyTable) {
        let words = words_from_slice(&["apple", "grape", "mango", "lemon", "melon"]);
        let table: FrequencyTable = [("lemon", 3.0), ("melon", 2.0), ("mango", 1.0)]
            .into_iter()
            .collect();
        (words, table)
    }

    fn play(script: &str) -> (SessionStatus, String) {
        let (words, table) = fixture();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let status = run_simple_with(
            &words,
            &table,
            AssistantConfig::default(),
            &mut input,
            &mut output,
        )
        .unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_solves_first_round() {
        let (status, text) = play("win\n");
        assert!(matches!(status, SessionStatus::Solved { rounds: 1, .. }));
        assert!(text.contains("LEMON"));
    }

    #[test]
    fn invalid_feedback_is_reprompted() {
        let (status, text) = play("ggg\nggggg\n");
        assert!(matches!(status, SessionStatus::Solved { rounds: 1, .. }));
        assert!(text.contains("invalid feedback"));
    }

    #[test]
    fn quit_and_eof_abort() {
        let (status, _) = play("quit\n");
        assert_eq!(status, SessionStatus::Aborted { rounds: 0 });

        let (status, _) = play("");
        assert_eq!(status, SessionStatus::Aborted { rounds: 0 });
    }

    #[test]
    fn bad_word_is_skipped() {
        let (status, text) = play("bad\nggggg\n");
        assert!(text.contains("Skipping LEMON"));
        assert!(matches!(status, SessionStatus::Solved { ref word, .. } if word == "grape"));
    }

    #[test]
    fn partial_feedback_shows_knowledge() {
        // LEMON with only E present leaves GRAPE
        let (status, text) = play("bybbb\nggggg\n");
        assert!(text.contains("Known:"));
        assert!(matches!(status, SessionStatus::Solved { ref word, rounds: 2 } if word == "grape"));
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        // LEMON all grey leaves no word in the list
        let (status, text) = play("bbbbb\n");
        assert_eq!(status, SessionStatus::Exhausted { rounds: 1 });
        assert!(text.contains("EXHAUSTED"));
    }
}
