//! Main Wordle solver interface

use super::entropy::{InformationTable, build_table};
use super::filter::reconstruct_candidates;
use crate::core::{Turn, Word};
use crate::error::{Error, Result};

/// Outcome of one solver turn
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The entropy-maximizing guess
    pub best_guess: Word,
    /// Expected bits of every word considered as a guess
    pub table: InformationTable,
    /// Candidates still consistent with the history
    pub candidates: Vec<Word>,
}

impl Solution {
    /// Expected bits of the best guess
    #[must_use]
    pub fn best_bits(&self) -> f64 {
        self.table.get(&self.best_guess).unwrap_or_default()
    }
}

/// Main Wordle solver
///
/// Holds no game state: every call rebuilds the candidate set from the
/// dictionary and the history it is given.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a [Word],
    guess_pool: Option<&'a [Word]>,
}

impl<'a> Solver<'a> {
    /// Create a solver that only ever guesses words still possible as the secret
    ///
    /// # Parameters
    /// - `dictionary`: Ordered, duplicate-free list of possible secrets; its
    ///   order decides ties
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            guess_pool: None,
        }
    }

    /// Also consider words from a separate guessable dictionary
    ///
    /// Pool words are evaluated first, then any live candidate the pool does
    /// not contain. Ties go to a live candidate, then to evaluation order.
    #[must_use]
    pub const fn with_guess_pool(mut self, guess_pool: &'a [Word]) -> Self {
        self.guess_pool = Some(guess_pool);
        self
    }

    /// Dictionary of possible secrets
    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Separate guessable dictionary, if any
    #[must_use]
    pub const fn guess_pool(&self) -> Option<&'a [Word]> {
        self.guess_pool
    }

    /// Whether `word` is in the dictionary or the guess pool
    #[must_use]
    pub fn knows(&self, word: &Word) -> bool {
        self.dictionary.contains(word) || self.guess_pool.is_some_and(|pool| pool.contains(word))
    }

    /// Candidates consistent with every turn in `history`
    ///
    /// # Errors
    /// Returns [`Error::EmptyDictionary`] or [`Error::Contradiction`].
    pub fn candidates(&self, history: &[Turn]) -> Result<Vec<Word>> {
        reconstruct_candidates(self.dictionary, history)
    }

    /// Pick the next guess given previous guesses and patterns
    ///
    /// # Errors
    /// Returns [`Error::EmptyDictionary`] if there is nothing to guess from,
    /// and [`Error::Contradiction`] if the history rules out every word.
    pub fn solve(&self, history: &[Turn]) -> Result<Solution> {
        let candidates = self.candidates(history)?;
        log::debug!(
            "{} of {} candidates remain after {} turns",
            candidates.len(),
            self.dictionary.len(),
            history.len()
        );

        let (table, best) = match self.guess_pool {
            None => {
                let table = build_table(&candidates, &candidates);
                let best = table.best();
                (table, best)
            }
            Some(pool) => {
                let guesses: Vec<Word> = pool
                    .iter()
                    .chain(candidates.iter().filter(|c| !pool.contains(c)))
                    .copied()
                    .collect();
                let table = build_table(&guesses, &candidates);
                let best = best_preferring_candidates(&table, &candidates);
                (table, best)
            }
        };

        let (best_guess, bits) = best.ok_or(Error::EmptyDictionary)?;
        log::debug!("best guess {best_guess} ({bits:.3} bits)");

        Ok(Solution {
            best_guess,
            table,
            candidates,
        })
    }
}

fn best_preferring_candidates(
    table: &InformationTable,
    candidates: &[Word],
) -> Option<(Word, f64)> {
    let mut best: Option<(Word, f64, bool)> = None;

    for &(word, bits) in table.entries() {
        let live = candidates.contains(&word);
        let better = match best {
            None => true,
            Some((_, best_bits, best_live)) => {
                bits > best_bits || (bits == best_bits && live && !best_live)
            }
        };
        if better {
            best = Some((word, bits, live));
        }
    }

    best.map(|(word, bits, _)| (word, bits))
}

/// Reconstruct the candidates from `initial` and `history`, then pick the
/// entropy-maximizing candidate
///
/// # Errors
/// See [`Solver::solve`].
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::solve;
///
/// let words: Vec<Word> = ["slate", "crate", "grate", "irate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let solution = solve(&words, &[]).unwrap();
/// assert_eq!(solution.table.len(), 4);
/// assert!(words.contains(&solution.best_guess));
/// ```
pub fn solve(initial: &[Word], history: &[Turn]) -> Result<Solution> {
    Solver::new(initial).solve(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::wordlists::WORDS;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(w: &str) -> Word {
        Word::new(w).unwrap()
    }

    fn turn(guess: &str, secret: &str) -> Turn {
        let guess = word(guess);
        (guess, Pattern::calculate(&guess, &word(secret)))
    }

    #[test]
    fn singleton_is_its_own_best_guess() {
        let dictionary = words(&["crane"]);

        let solution = solve(&dictionary, &[]).unwrap();

        assert_eq!(solution.best_guess, word("crane"));
        assert_eq!(solution.table.get(&word("crane")), Some(0.0));
        assert_eq!(solution.best_bits(), 0.0);
    }

    #[test]
    fn two_way_split_is_one_bit() {
        let dictionary = words(&["slate", "crony"]);

        let solution = solve(&dictionary, &[]).unwrap();

        assert_eq!(solution.table.get(&word("slate")), Some(1.0));
        assert_eq!(solution.table.get(&word("crony")), Some(1.0));
        // Tie goes to the first word in dictionary order
        assert_eq!(solution.best_guess, word("slate"));
    }

    #[test]
    fn table_covers_exactly_the_live_candidates() {
        let dictionary = words(&["crane", "slate", "irate", "crate", "grate"]);
        let history = vec![turn("crane", "grate")];

        let solution = solve(&dictionary, &history).unwrap();

        assert_eq!(solution.table.len(), solution.candidates.len());
        for candidate in &solution.candidates {
            assert!(solution.table.contains(candidate));
        }
        assert!(!solution.table.contains(&word("crane")));
    }

    #[test]
    fn entropy_is_bounded_by_log_of_candidates() {
        let dictionary = words(&[
            "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast",
            "beast",
        ]);

        let solution = solve(&dictionary, &[]).unwrap();
        let bound = (solution.candidates.len() as f64).log2();

        for bits in solution.table.values() {
            assert!(bits >= 0.0);
            assert!(bits <= bound + 1e-9);
        }
    }

    #[test]
    fn best_guess_has_the_maximum_value() {
        let dictionary = words(&["crane", "slate", "trace", "crate", "raise", "arise"]);

        let solution = solve(&dictionary, &[]).unwrap();
        let max = solution.table.values().fold(f64::MIN, f64::max);

        assert_eq!(solution.best_bits(), max);
    }

    #[test]
    fn solve_is_deterministic() {
        let dictionary = words(&["crane", "slate", "trace", "crate", "raise", "arise", "stare"]);
        let history = vec![turn("roast", "stare")];

        let first = solve(&dictionary, &history);
        let second = solve(&dictionary, &history);

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn contradiction_is_surfaced() {
        let dictionary = words(&["crane", "slate"]);
        let history = vec![(word("zzzzz"), Pattern::parse("ZZZZZ").unwrap())];

        assert!(matches!(
            solve(&dictionary, &history),
            Err(Error::Contradiction)
        ));
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert!(matches!(solve(&[], &[]), Err(Error::EmptyDictionary)));
    }

    #[test]
    fn guess_pool_can_pick_an_eliminated_word() {
        // Candidates differ only in the first letter; one probe separates all four
        let dictionary = words(&["bight", "fight", "light", "might"]);
        let pool = words(&["flamb"]);

        let solver = Solver::new(&dictionary).with_guess_pool(&pool);
        let solution = solver.solve(&[]).unwrap();

        assert_eq!(solution.best_guess, word("flamb"));
        assert_eq!(solution.best_bits(), 2.0);
        // Live candidates are still in the table
        assert_eq!(solution.table.len(), 5);
    }

    #[test]
    fn guess_pool_prefers_candidates_on_ties() {
        let dictionary = words(&["slate", "crony"]);
        let pool = words(&["zzzzz", "slate"]);

        let solver = Solver::new(&dictionary).with_guess_pool(&pool);
        let solution = solver.solve(&[turn("slate", "slate")]).unwrap();

        assert_eq!(solution.candidates, words(&["slate"]));
        assert_eq!(solution.best_guess, word("slate"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn every_table_value_is_within_entropy_bounds(
            sample in prop::sample::subsequence(WORDS.to_vec(), 1..40),
        ) {
            let dictionary: Vec<Word> = sample.iter().map(|w| word(w)).collect();
            let bound = (dictionary.len() as f64).log2();

            let solution = solve(&dictionary, &[]).unwrap();

            prop_assert_eq!(solution.table.len(), dictionary.len());
            for bits in solution.table.values() {
                prop_assert!(bits >= 0.0);
                prop_assert!(bits <= bound + 1e-9);
            }
            prop_assert!(solution.best_bits() <= bound + 1e-9);
        }
    }
}
