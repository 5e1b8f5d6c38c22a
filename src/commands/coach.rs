//! Coach command
//!
//! Scores a player's guesses turn by turn against the solver's choices,
//! then shows the game the solver would have played.

use super::replay::{ReplayConfig, ReplayResult, replay};
use crate::core::{Pattern, Turn, Word};
use crate::error::{Error, Result};
use crate::solver::{
    Score, Solver, Verdict, filter_candidates, realized_information, score_against_candidates,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// One scored turn of a player's game
#[derive(Debug, Clone, Copy)]
pub struct CoachTurn {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// The solver's choice for this turn
    pub best_guess: Word,
    pub score: Score,
    pub verdict: Verdict,
}

/// A coached game and the solver's own game against the same secret
#[derive(Debug, Clone)]
pub struct CoachResult {
    pub secret: Word,
    pub turns: Vec<CoachTurn>,
    pub solved: bool,
    pub solver_game: ReplayResult,
}

/// Choose a secret from the dictionary, reproducibly when `seed` is given
#[must_use]
pub fn pick_secret(dictionary: &[Word], seed: Option<u64>) -> Option<Word> {
    match seed {
        Some(seed) => dictionary.choose(&mut StdRng::seed_from_u64(seed)).copied(),
        None => dictionary.choose(&mut rand::rng()).copied(),
    }
}

/// Score `guesses` against `secret`
///
/// Guesses after the one that finds the secret are ignored.
///
/// # Errors
///
/// Returns [`Error::UnknownWord`] if the secret is not in the dictionary or a
/// guess is in no word list.
pub fn coach(solver: &Solver<'_>, secret: Word, guesses: &[Word]) -> Result<CoachResult> {
    if !solver.dictionary().contains(&secret) {
        return Err(Error::UnknownWord(secret));
    }
    if let Some(unknown) = guesses.iter().find(|g| !solver.knows(g)) {
        return Err(Error::UnknownWord(*unknown));
    }

    let mut history: Vec<Turn> = Vec::new();
    let mut turns = Vec::new();
    let mut solved = false;

    for &guess in guesses {
        let solution = solver.solve(&history)?;
        let pattern = Pattern::calculate(&guess, &secret);
        let remaining = filter_candidates(&solution.candidates, &guess, &pattern)?;

        let realized = realized_information(solution.candidates.len(), remaining.len())?;
        let scored = score_against_candidates(
            &guess,
            &solution.table,
            &solution.candidates,
            &solution.best_guess,
            realized,
        )?;
        let verdict = Verdict::classify(&scored, pattern.is_solved());
        log::debug!("{guess}: {verdict:?}");

        history.push((guess, pattern));
        turns.push(CoachTurn {
            guess,
            pattern,
            candidates_before: solution.candidates.len(),
            candidates_after: remaining.len(),
            best_guess: solution.best_guess,
            score: scored,
            verdict,
        });

        if pattern.is_solved() {
            solved = true;
            break;
        }
    }

    if turns.len() < guesses.len() {
        log::warn!(
            "ignoring {} guesses after the secret was found",
            guesses.len() - turns.len()
        );
    }

    let solver_game = replay(solver, ReplayConfig::new(secret))?;

    Ok(CoachResult {
        secret,
        turns,
        solved,
        solver_game,
    })
}
