//! Benchmark command
//!
//! Tests solver performance across multiple words.

use super::replay::{ReplayConfig, replay};
use crate::core::Word;
use crate::error::Result;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count of each solved game
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against every word in `secrets`
///
/// Games run in parallel; each one is an independent solver game.
///
/// # Errors
///
/// Returns an error if any secret is not in the solver's dictionary.
pub fn run_benchmark(
    solver: &Solver<'_>,
    secrets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let games = secrets
        .par_iter()
        .map(|&secret| {
            let game = replay(solver, ReplayConfig::new(secret));
            pb.inc(1);
            game
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    for game in &games {
        if game.success {
            *distribution.entry(game.steps.len()).or_insert(0) += 1;
        } else {
            failures.push(game.secret);
        }
    }

    let total_words = games.len();
    let total_guesses: usize = games.iter().map(|g| g.steps.len()).sum();
    let min_guesses = games.iter().map(|g| g.steps.len()).min().unwrap_or(0);
    let max_guesses = games.iter().map(|g| g.steps.len()).max().unwrap_or(0);

    log::info!(
        "benchmarked {total_words} words in {:.2}s",
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_words,
        solved: total_words - failures.len(),
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::replay::MAX_GUESSES;
    use crate::wordlists::default_dictionary;

    #[test]
    fn benchmark_runs() {
        let words = default_dictionary();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], false).unwrap();

        assert_eq!(result.total_words, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = default_dictionary();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let words = default_dictionary();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &[], false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.average_guesses, 0.0);
    }

    #[test]
    fn benchmark_is_deterministic() {
        let words = default_dictionary();
        let solver = Solver::new(&words);

        let first = run_benchmark(&solver, &words[..5], false).unwrap();
        let second = run_benchmark(&solver, &words[..5], false).unwrap();

        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.total_guesses, second.total_guesses);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let words = default_dictionary();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], false).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_GUESSES).contains(&guess_count));
        }
    }
}
