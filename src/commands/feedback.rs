//! Feedback command
//!
//! Encodes the pattern a guess would receive against a secret.

use crate::core::{Pattern, Word};
use crate::error::Result;

/// Result of encoding one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackResult {
    pub guess: Word,
    pub secret: Word,
    pub pattern: Pattern,
}

/// Encode `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either token is not a five-letter word.
pub fn run_feedback(guess: &str, secret: &str) -> Result<FeedbackResult> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;

    Ok(FeedbackResult {
        guess,
        secret,
        pattern: Pattern::calculate(&guess, &secret),
    })
}
