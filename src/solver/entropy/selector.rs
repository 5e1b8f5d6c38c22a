//! Pure entropy-based word selection
//!
//! Scores every word in a guess pool and selects the one that maximizes
//! Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use super::table::InformationTable;
use crate::core::Word;

/// Expected information of each word in `guess_pool` against `candidates`
///
/// Evaluated sequentially, in pool order.
#[must_use]
pub fn build_table(guess_pool: &[Word], candidates: &[Word]) -> InformationTable {
    guess_pool
        .iter()
        .map(|&guess| {
            let entropy = calculate_entropy(&guess, candidates);
            log::trace!("{guess}: {entropy:.4} bits");
            (guess, entropy)
        })
        .collect()
}

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value, or `None`
/// if the guess pool is empty. Ties go to the earliest word in the pool.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::entropy::select_best_guess;
///
/// let guesses = vec![Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Word], candidates: &[Word]) -> Option<(Word, f64)> {
    build_table(guess_pool, candidates).best()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();

        assert_eq!(best.text(), "aeros");
        assert!(entropy > 0.5);
    }

    #[test]
    fn single_guess_returns_that_guess() {
        let guesses = words(&["crane"]);
        let candidates = words(&["slate"]);

        let (best, _) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.text(), "crane");
    }

    #[test]
    fn ties_go_to_first_in_pool() {
        // Every guess scores zero against a single candidate
        let guesses = words(&["bbbbb", "aaaaa", "ccccc"]);
        let candidates = words(&["ddddd"]);

        let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();

        assert_eq!(best.text(), "bbbbb");
        assert_eq!(entropy, 0.0);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn table_follows_pool_order() {
        let guesses = words(&["slate", "crane", "irate"]);
        let candidates = words(&["slate", "crate", "grate"]);

        let table = build_table(&guesses, &candidates);
        let order: Vec<Word> = table.entries().iter().map(|&(w, _)| w).collect();

        assert_eq!(order, guesses);
    }
}
