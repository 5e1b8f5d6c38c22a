//! Replay command
//!
//! Lets the solver play a whole game against a known secret.

use crate::core::{Pattern, Turn, Word};
use crate::error::{Error, Result};
use crate::solver::Solver;
use crate::solver::entropy::calculate_metrics;

/// Default number of guesses allowed in a game
pub const MAX_GUESSES: usize = 6;

/// Configuration for replaying a game
#[derive(Debug, Clone, Copy)]
pub struct ReplayConfig {
    pub secret: Word,
    pub max_guesses: usize,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of a solver game
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

impl GuessStep {
    /// Bits actually gained by this step
    #[must_use]
    pub fn realized_bits(&self) -> f64 {
        (self.candidates_before as f64 / self.candidates_after.max(1) as f64).log2()
    }
}

impl ReplayResult {
    /// The game as a guess history
    #[must_use]
    pub fn history(&self) -> Vec<Turn> {
        self.steps.iter().map(|s| (s.word, s.pattern)).collect()
    }
}

/// Play the solver against `config.secret`
///
/// Stops when the pattern is all exact matches or the guess limit is hit.
///
/// # Errors
///
/// Returns [`Error::UnknownWord`] if the secret is not in the dictionary.
pub fn replay(solver: &Solver<'_>, config: ReplayConfig) -> Result<ReplayResult> {
    let secret = config.secret;
    if !solver.dictionary().contains(&secret) {
        return Err(Error::UnknownWord(secret));
    }

    let mut history: Vec<Turn> = Vec::new();
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let solution = solver.solve(&history)?;
        let guess = solution.best_guess;
        let metrics = calculate_metrics(&guess, &solution.candidates);

        let pattern = Pattern::calculate(&guess, &secret);
        let candidates_after = solution
            .candidates
            .iter()
            .filter(|c| Pattern::calculate(&guess, c) == pattern)
            .count();

        history.push((guess, pattern));
        steps.push(GuessStep {
            word: guess,
            pattern,
            candidates_before: solution.candidates.len(),
            candidates_after,
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
        });

        if pattern.is_solved() {
            log::debug!("solved {secret} in {} guesses", steps.len());
            return Ok(ReplayResult {
                success: true,
                steps,
                secret,
            });
        }
    }

    log::debug!("failed to solve {secret} in {} guesses", config.max_guesses);
    Ok(ReplayResult {
        success: false,
        steps,
        secret,
    })
}
