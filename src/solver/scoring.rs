//! Ranking a player's guess against the solver's information table

use super::entropy::InformationTable;
use crate::core::Word;
use crate::error::{Error, Result};

/// Where a guess ranks among every guess the solver considered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// 100 for the top of the table, lower for worse guesses
    pub percentile: f64,
    /// Expected bits for a live candidate, realized bits otherwise
    pub reported_bits: f64,
    /// Expected bits of the solver's best guess
    pub best_bits: f64,
    /// Whether the guess was still a live candidate
    pub in_table: bool,
}

/// Rank `guess` against `table`
///
/// A guess found in the table is ranked by its expected bits. Any other guess
/// was already impossible, so its `realized_bits` are inserted into the
/// sorted values and ranked instead. The percentile is
/// `100 * (1 - rank / len)` where `rank` is the first position of the value
/// in the descending sequence.
///
/// # Errors
/// Returns [`Error::EmptyTable`] for an empty table and
/// [`Error::NotInTable`] if `best_guess` has no entry.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::{InformationTable, score};
///
/// let slate = Word::new("slate").unwrap();
/// let table: InformationTable = [(slate, 2.0), (Word::new("crane").unwrap(), 1.0)]
///     .into_iter()
///     .collect();
///
/// let result = score(&slate, &table, &slate, 0.0).unwrap();
/// assert_eq!(result.percentile, 100.0);
/// assert!(result.in_table);
/// ```
pub fn score(
    guess: &Word,
    table: &InformationTable,
    best_guess: &Word,
    realized_bits: f64,
) -> Result<Score> {
    rank_guess(guess, table, table.contains(guess), best_guess, realized_bits)
}

/// Rank `guess` when the table also holds words that cannot be the secret
///
/// Only a guess found in `candidates` is ranked by its expected bits. A
/// guess-pool word that is no longer a candidate is ranked by its realized
/// bits, like any other eliminated guess.
///
/// # Errors
/// Same as [`score`].
pub fn score_against_candidates(
    guess: &Word,
    table: &InformationTable,
    candidates: &[Word],
    best_guess: &Word,
    realized_bits: f64,
) -> Result<Score> {
    let live = candidates.contains(guess) && table.contains(guess);
    rank_guess(guess, table, live, best_guess, realized_bits)
}

fn rank_guess(
    guess: &Word,
    table: &InformationTable,
    live: bool,
    best_guess: &Word,
    realized_bits: f64,
) -> Result<Score> {
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }
    let best_bits = table.get(best_guess).ok_or(Error::NotInTable(*best_guess))?;

    let mut values: Vec<f64> = table.values().collect();
    let reported_bits = match table.get(guess) {
        Some(bits) if live => bits,
        _ => {
            values.push(realized_bits);
            realized_bits
        }
    };
    values.sort_by(|a, b| b.total_cmp(a));

    let rank = values
        .iter()
        .position(|&v| v == reported_bits)
        .unwrap_or(values.len());
    let percentile = 100.0 * (1.0 - rank as f64 / values.len() as f64);

    Ok(Score {
        percentile,
        reported_bits,
        best_bits,
        in_table: live,
    })
}

/// Bits actually gained when the candidate set shrank from `before` to `after`
///
/// # Errors
/// Returns [`Error::Contradiction`] when nothing is left, and
/// [`Error::EmptyDictionary`] when there was nothing to begin with.
pub fn realized_information(before: usize, after: usize) -> Result<f64> {
    if before == 0 {
        return Err(Error::EmptyDictionary);
    }
    if after == 0 {
        return Err(Error::Contradiction);
    }
    Ok((before as f64 / after as f64).log2())
}

/// Commentary category for a scored turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The guess was the secret
    Solved,
    /// A live candidate tied with the best expected bits
    Optimal,
    /// A live candidate below the best
    Ranked { percentile: f64 },
    /// Already impossible, yet gained at least the best expected bits
    EliminatedButLucky,
    /// Already impossible while a single candidate remained
    EliminatedAfterNarrowed,
    /// Already impossible and gained nothing
    EliminatedUninformative,
    /// Any other impossible guess
    Eliminated { percentile: f64 },
}

impl Verdict {
    /// Classify a score; `solved` is whether the guess matched the secret
    #[must_use]
    pub fn classify(score: &Score, solved: bool) -> Self {
        if solved {
            return Self::Solved;
        }

        if score.in_table {
            return if score.best_bits > 0.0 && score.reported_bits == score.best_bits {
                Self::Optimal
            } else {
                Self::Ranked {
                    percentile: score.percentile,
                }
            };
        }

        if score.best_bits > 0.0 && score.reported_bits >= score.best_bits {
            Self::EliminatedButLucky
        } else if score.best_bits == 0.0 {
            Self::EliminatedAfterNarrowed
        } else if score.reported_bits == 0.0 {
            Self::EliminatedUninformative
        } else {
            Self::Eliminated {
                percentile: score.percentile,
            }
        }
    }

    /// Whether the guess could not have been the secret
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        matches!(
            self,
            Self::EliminatedButLucky
                | Self::EliminatedAfterNarrowed
                | Self::EliminatedUninformative
                | Self::Eliminated { .. }
        )
    }
}
