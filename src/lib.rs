//! Wordle Coach
//!
//! An entropy-maximizing Wordle solver that also ranks a player's guesses
//! against its own choice.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_coach::core::{Pattern, Word};
//! use wordle_coach::solver::{score, solve};
//!
//! let dictionary: Vec<Word> = ["slate", "crate", "grate", "irate", "lower"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let solution = solve(&dictionary, &[]).unwrap();
//! let guess = Word::new("lower").unwrap();
//! let result = score(&guess, &solution.table, &solution.best_guess, 0.0).unwrap();
//!
//! assert!(result.in_table);
//! assert!(result.reported_bits <= result.best_bits);
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
