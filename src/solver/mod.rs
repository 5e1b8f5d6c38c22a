//! Wordle solving algorithms
//!
//! Candidate filtering, entropy-maximizing guess selection, and ranking of
//! a player's guess against the solver's choice.

mod engine;
pub mod entropy;
pub mod filter;
pub mod scoring;

pub use engine::{Solution, Solver, solve};
pub use entropy::InformationTable;
pub use filter::{filter_candidates, reconstruct_candidates};
pub use scoring::{Score, Verdict, realized_information, score, score_against_candidates};
