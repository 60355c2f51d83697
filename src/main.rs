//! Wordle Assistant - CLI
//!
//! Suggests guesses from accumulated feedback, simulates games against known targets and
//! recovers answers from shared hint grids.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordle_assistant::{
    commands::{SolveConfig, run_benchmark, run_reverse, run_simple, sample_targets, solve_word},
    core::Word,
    output::{print_benchmark_result, print_session_end, print_solve_result},
    solver::AssistantConfig,
    wordlists::{
        FrequencyTable,
        loader::{load_frequencies_from_file, load_words_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle assistant: explores common letters first, then guesses the likeliest word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line (only 5-letter words are used)
    #[arg(short = 'w', long, global = true, default_value = "/usr/share/dict/words")]
    words: PathBuf,

    /// Frequency list of `word count` lines; every word weighs the same without it
    #[arg(short = 'f', long, global = true)]
    freq: Option<PathBuf>,

    /// Rounds spent exploring before switching to guessing
    #[arg(long, global = true, default_value_t = AssistantConfig::new().explore_rounds)]
    explore_rounds: usize,

    /// Known letter positions that trigger guessing early
    #[arg(long, global = true, default_value_t = AssistantConfig::new().exact_threshold)]
    exact_threshold: usize,

    /// Multiplier for vowel scores while exploring
    #[arg(long, global = true, default_value_t = AssistantConfig::new().vowel_weight)]
    vowel_weight: f64,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggest a word, read the game's feedback
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show mode and candidate counts per round
        #[arg(short, long)]
        details: bool,
    },

    /// Benchmark the assistant on random targets from the word list
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Recover the answer from hint grids other players shared
    Reverse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = AssistantConfig {
        explore_rounds: cli.explore_rounds,
        exact_threshold: cli.exact_threshold,
        vowel_weight: cli.vowel_weight,
        ..AssistantConfig::new()
    };
    config.validate()?;

    let words = load_words_from_file(&cli.words)
        .with_context(|| format!("failed to read word list {}", cli.words.display()))?;
    anyhow::ensure!(
        !words.is_empty(),
        "no 5-letter words found in {}",
        cli.words.display()
    );
    let frequencies = load_frequencies(cli.freq.as_deref(), &words)?;

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            run_simple(&words, &frequencies, config)?;
            Ok(())
        }
        Commands::Solve { word, details } => {
            run_solve_command(&word, details, &words, &frequencies, config)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &words, &frequencies, config);
            Ok(())
        }
        Commands::Reverse => {
            let stdin = std::io::stdin();
            run_reverse(&words, &words, &mut stdin.lock(), &mut std::io::stdout())?;
            Ok(())
        }
    }
}

/// Load the frequency table, or weigh every word equally when no file is given
fn load_frequencies(path: Option<&Path>, words: &[Word]) -> Result<FrequencyTable> {
    let Some(path) = path else {
        info!("No frequency list given; all words weigh the same");
        return Ok(words.iter().map(|w| (w.text(), 1.0)).collect());
    };

    let table = load_frequencies_from_file(path, Some(words))
        .with_context(|| format!("failed to read frequency list {}", path.display()))?;
    anyhow::ensure!(
        !table.is_empty(),
        "no usable word frequencies in {}",
        path.display()
    );
    Ok(table)
}

fn run_solve_command(
    word: &str,
    details: bool,
    words: &[Word],
    frequencies: &FrequencyTable,
    config: AssistantConfig,
) -> Result<()> {
    let solve_config = SolveConfig::new(word.to_lowercase());
    let result = solve_word(&solve_config, words, frequencies, config)?;

    print_solve_result(&result, details);
    if details {
        print_session_end(&mut std::io::stdout(), &result.status)?;
    }
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    words: &[Word],
    frequencies: &FrequencyTable,
    config: AssistantConfig,
) {
    println!("Running benchmark on {count} random words...");

    let targets = sample_targets(words, count, seed);
    let result = run_benchmark(words, frequencies, config, &targets, true);
    print_benchmark_result(&result);
}
