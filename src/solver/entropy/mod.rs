//! Entropy-based Wordle solver
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;
mod table;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, pattern_counts, shannon_entropy,
};
pub use selector::{build_table, select_best_guess};
pub use table::InformationTable;
