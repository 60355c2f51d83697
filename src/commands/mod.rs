//! Command implementations

pub mod benchmark;
pub mod reverse;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use reverse::{ReverseSolver, run_reverse};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};
