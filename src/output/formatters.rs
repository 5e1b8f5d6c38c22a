//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Exact(_) => '🟩',
            Mark::Elsewhere(_) => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most bits possible for `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Percentile with an ordinal suffix, e.g. `92.5th`
#[must_use]
pub fn format_percentile(percentile: f64) -> String {
    if (percentile - percentile.round()).abs() > 1e-9 {
        return format!("{percentile:.1}th");
    }

    let whole = percentile.round() as u64;
    let suffix = match (whole % 10, whole % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{whole}{suffix}")
}
