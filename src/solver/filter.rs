//! Candidate filtering
//!
//! Narrows a candidate set to the words consistent with observed feedback.

use crate::core::{Pattern, Turn, Word};
use crate::error::{Error, Result};

/// Keep the candidates that would have produced `pattern` for `guess`
///
/// Relative order is preserved and the input is left untouched.
///
/// # Errors
/// Returns [`Error::Contradiction`] if no candidate survives.
///
/// # Examples
/// ```
/// use wordle_coach::core::{Pattern, Word};
/// use wordle_coach::solver::filter_candidates;
///
/// let words: Vec<Word> = ["eaten", "lower", "liver"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("lever").unwrap();
/// let pattern = Pattern::parse("L--ER").unwrap();
///
/// let remaining = filter_candidates(&words, &guess, &pattern).unwrap();
/// assert_eq!(remaining, vec![Word::new("lower").unwrap()]);
/// ```
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    pattern: &Pattern,
) -> Result<Vec<Word>> {
    let filtered: Vec<Word> = candidates
        .iter()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == *pattern)
        .copied()
        .collect();

    if filtered.is_empty() {
        return Err(Error::Contradiction);
    }

    Ok(filtered)
}

/// Rebuild the current candidate set from the initial dictionary and the full history
///
/// Folds [`filter_candidates`] over the turns in order; the history is the
/// source of truth, so this is rerun from scratch rather than trusting a
/// previously filtered set.
///
/// # Errors
/// Returns [`Error::EmptyDictionary`] if `initial` is empty and
/// [`Error::Contradiction`] as soon as an intermediate set becomes empty.
pub fn reconstruct_candidates(initial: &[Word], history: &[Turn]) -> Result<Vec<Word>> {
    if initial.is_empty() {
        return Err(Error::EmptyDictionary);
    }

    history
        .iter()
        .try_fold(initial.to_vec(), |candidates, (guess, pattern)| {
            let filtered = filter_candidates(&candidates, guess, pattern)?;
            log::trace!(
                "{guess} {pattern}: {} -> {} candidates",
                candidates.len(),
                filtered.len()
            );
            Ok(filtered)
        })
}
