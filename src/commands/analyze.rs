//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::{Turn, Word};
use crate::error::{Error, Result};
use crate::solver::Solver;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Whether the word could still be the secret
    pub is_candidate: bool,
    pub best_guess: Word,
    pub best_bits: f64,
}

/// Analyze the entropy of a word against the candidates left after `history`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the solver's word lists
/// - The history contradicts every dictionary word
pub fn analyze_word(solver: &Solver<'_>, word: &str, history: &[Turn]) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    if !solver.knows(&word) {
        return Err(Error::UnknownWord(word));
    }

    let solution = solver.solve(history)?;
    let metrics = calculate_metrics(&word, &solution.candidates);

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: solution.candidates.len(),
        is_candidate: solution.candidates.contains(&word),
        best_bits: solution.best_bits(),
        best_guess: solution.best_guess,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_turn;
    use crate::wordlists::default_dictionary;

    #[test]
    fn analyze_valid_word() {
        let words = default_dictionary();
        let solver = Solver::new(&words[..100]);

        let result = analyze_word(&solver, &words[0].text(), &[]).unwrap();

        assert_eq!(result.word, words[0]);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 100);
        assert!(result.is_candidate);
    }

    #[test]
    fn analyze_unknown_word() {
        let words = default_dictionary();
        let solver = Solver::new(&words[..100]);

        let result = analyze_word(&solver, "zzzzz", &[]);
        assert!(matches!(result, Err(Error::UnknownWord(_))));
    }

    #[test]
    fn entropy_properties() {
        let words = default_dictionary();
        let solver = Solver::new(&words[..100]);

        let result = analyze_word(&solver, &words[10].text(), &[]).unwrap();

        // Entropy should be bounded
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (100_f64).log2());
        assert!(result.entropy <= result.best_bits);

        // Expected remaining should be sensible
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= 100.0);
        assert!(result.max_partition as f64 >= result.expected_remaining);
    }

    #[test]
    fn analyze_eliminated_word() {
        let words = default_dictionary();
        let solver = Solver::new(&words);
        let history = vec![parse_turn("lever:L--ER").unwrap()];

        let result = analyze_word(&solver, "crane", &history).unwrap();

        assert!(!result.is_candidate);
        assert!(result.total_candidates >= 1);
    }
}
