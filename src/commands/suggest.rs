//! Suggest command
//!
//! Recommends the next guess for a game in progress.

use crate::core::{Turn, Word};
use crate::error::Result;
use crate::solver::Solver;

/// Result of asking the solver for its next guess
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub turns: usize,
    pub candidates: Vec<Word>,
    pub best_guess: Word,
    pub best_bits: f64,
    /// Highest-scoring guesses, best first
    pub top: Vec<(Word, f64)>,
}

/// Pick the next guess after `history`
///
/// # Errors
///
/// Returns an error if the history contradicts every dictionary word.
pub fn suggest(solver: &Solver<'_>, history: &[Turn], top: usize) -> Result<SuggestResult> {
    let solution = solver.solve(history)?;

    Ok(SuggestResult {
        turns: history.len(),
        best_bits: solution.best_bits(),
        top: solution.table.top(top),
        best_guess: solution.best_guess,
        candidates: solution.candidates,
    })
}
