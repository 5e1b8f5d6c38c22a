//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, assuming the secret is
/// uniformly distributed over `candidates`.
///
/// # Formula
/// H(X) = Σ p(x) * log₂(1 / p(x))
///
/// where p(x) is the fraction of candidates producing pattern x.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("crony").unwrap()];
///
/// // Two candidates, two distinct patterns: a perfect one-bit split
/// assert_eq!(calculate_entropy(&guess, &candidates), 1.0);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&pattern_counts(guess, candidates))
}

/// Group candidates by the pattern they produce with the guess
///
/// The counts divided by `candidates.len()` form the pattern distribution
/// the guess induces.
#[must_use]
pub fn pattern_counts(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<Pattern, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = pattern_counts(guess, candidates);
    let total = candidates.len() as f64;

    // Σ p * |partition|
    let expected_remaining: f64 = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    }
}
