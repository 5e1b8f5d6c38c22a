//! Core domain types for Wordle
//!
//! Words, feedback patterns and the guess history that ties them together.
//! Everything here is pure and deterministic.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern, encode};
pub use word::{WORD_LENGTH, Word};

use crate::error::{Error, Result};

/// One observed turn: the word that was played and the feedback it received
pub type Turn = (Word, Pattern);

/// Parse a turn written as `guess:pattern`, e.g. `lever:-e-E-`
///
/// # Errors
/// Returns an error if the separator is missing, the guess is not a valid
/// word, or the pattern is malformed or carries letters that differ from the
/// guess.
pub fn parse_turn(s: &str) -> Result<Turn> {
    let (guess, pattern) = s
        .split_once(':')
        .ok_or_else(|| Error::InvalidPattern(s.to_string()))?;

    let guess = Word::new(guess.trim())?;
    let pattern = Pattern::parse(pattern.trim())?;

    if !pattern.fits_guess(&guess) {
        return Err(Error::InvalidPattern(s.to_string()));
    }

    Ok((guess, pattern))
}
