//! Display functions for command results

use super::formatters::{entropy_bar, format_percentile};
use super::renderer::Renderer;
use crate::commands::{
    AnalysisResult, BenchmarkResult, CoachResult, CoachTurn, FeedbackResult, MAX_GUESSES,
    ReplayResult, SuggestResult,
};
use crate::solver::Verdict;
use colored::Colorize;

/// Print the pattern a guess receives
pub fn print_feedback(result: &FeedbackResult, renderer: &dyn Renderer) {
    println!("{}", result.pattern);
    println!("{}", renderer.render(&result.guess, &result.pattern));
}

/// Print the solver's recommendation for the next guess
pub fn print_suggestions(result: &SuggestResult) {
    let remaining = result.candidates.len();
    println!(
        "\n{} candidates remain after {} turns",
        remaining.to_string().bright_yellow().bold(),
        result.turns
    );
    println!(
        "Best guess: {} ({})",
        result.best_guess.to_string().green().bold(),
        format!("{:.3} bits", result.best_bits).bright_yellow()
    );

    if remaining <= 10 {
        let list: Vec<String> = result.candidates.iter().map(ToString::to_string).collect();
        println!("Candidates: {}", list.join(", "));
    }

    if !result.top.is_empty() {
        println!("\n{}", "Top guesses:".bright_cyan().bold());
        for (rank, (word, bits)) in result.top.iter().enumerate() {
            let bar = entropy_bar(*bits, remaining, 30);
            println!("  {:>2}. {word} [{}] {bits:.3} bits", rank + 1, bar.green());
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);
    println!(
        "   Candidate:   {}",
        if result.is_candidate { "yes" } else { "no" }
    );
    println!(
        "   Best guess:  {} ({:.3} bits)",
        result.best_guess, result.best_bits
    );
}

/// One line of commentary for a coached turn
#[must_use]
pub fn commentary(turn: &CoachTurn) -> String {
    let score = &turn.score;
    let best = turn.best_guess;

    match turn.verdict {
        Verdict::Solved => "Solved!".to_string(),
        Verdict::Optimal => format!(
            "Optimal guess: {:.3} expected bits, same as {best}.",
            score.reported_bits
        ),
        Verdict::Ranked { percentile } => format!(
            "{} percentile with {:.3} expected bits. {best} expected {:.3}.",
            format_percentile(percentile),
            score.reported_bits,
            score.best_bits
        ),
        Verdict::EliminatedButLucky => format!(
            "Already ruled out, yet it gained {:.3} bits, at least the {:.3} expected from {best}.",
            score.reported_bits, score.best_bits
        ),
        Verdict::EliminatedAfterNarrowed => format!(
            "Already ruled out while only {best} was left. It gained {:.3} bits.",
            score.reported_bits
        ),
        Verdict::EliminatedUninformative => format!(
            "Already ruled out and gained nothing. {best} expected {:.3} bits.",
            score.best_bits
        ),
        Verdict::Eliminated { percentile } => format!(
            "Already ruled out. {} percentile with {:.3} realized bits. {best} expected {:.3}.",
            format_percentile(percentile),
            score.reported_bits,
            score.best_bits
        ),
    }
}

/// Print a coached game followed by the solver's own game
pub fn print_coach_result(result: &CoachResult, renderer: &dyn Renderer, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            i + 1,
            renderer.render(&turn.guess, &turn.pattern)
        );
        let line = commentary(turn);
        if turn.verdict.is_eliminated() {
            println!("  {}", line.yellow());
        } else {
            println!("  {}", line.green());
        }
        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ You won in {} guesses!", result.turns.len())
                .green()
                .bold()
        );
    } else if result.turns.len() >= MAX_GUESSES {
        println!("{}", "❌ Too many guesses, you lose.".red().bold());
    } else {
        println!(
            "{}",
            format!("Secret not found after {} guesses", result.turns.len()).yellow()
        );
    }
    println!("The secret was {}", result.secret.to_string().bold());

    println!("\n{}", "The solver's game:".bright_cyan().bold());
    print_replay_result(&result.solver_game, renderer, verbose);
}

/// Print a game played by the solver
pub fn print_replay_result(result: &ReplayResult, renderer: &dyn Renderer, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            i + 1,
            renderer.render(&step.word, &step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);
            println!(
                "  Info gained: {:.3} bits ({:.1}x reduction)",
                step.realized_bits(),
                step.candidates_before as f64 / step.candidates_after.max(1) as f64
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failures.is_empty() {
        let list: Vec<String> = result.failures.iter().map(ToString::to_string).collect();
        println!("\n❌ {}: {}", "Failed".red().bold(), list.join(", "));
    }
}
