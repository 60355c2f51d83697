//! Terminal output formatting
//!
//! Display utilities for interactive rounds and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_constraints, print_session_end, print_solve_result,
    print_suggestion,
};
