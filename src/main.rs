//! Wordle Coach - CLI
//!
//! Scores Wordle guesses against the entropy-maximizing guess and lets the
//! solver play its own games.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_coach::{
    Error,
    commands::{
        ReplayConfig, analyze_word, coach, pick_secret, replay, run_benchmark, run_feedback,
        suggest,
    },
    core::{Turn, Word, parse_turn},
    output::{
        print_analysis_result, print_benchmark_result, print_coach_result, print_feedback,
        print_replay_result, print_suggestions, renderer_for,
    },
    solver::Solver,
    wordlists::{default_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_coach",
    about = "Ranks Wordle guesses against the entropy-maximizing guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Extra guessable words the solver may play even when they cannot be the secret
    #[arg(short = 'g', long, global = true)]
    guess_pool: Option<PathBuf>,

    /// Disable colour
    #[arg(long, global = true)]
    plain: bool,

    /// Show feedback rows as emoji squares, ready to share
    #[arg(long, global = true)]
    share: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feedback a guess receives against a secret
    Feedback {
        guess: String,
        secret: String,
    },

    /// Recommend the next guess, given turns written as guess:pattern
    Suggest {
        /// Previous turns, e.g. lever:-e-E-
        turns: Vec<String>,

        /// Number of top guesses to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Previous turns, e.g. lever:-e-E-
        turns: Vec<String>,
    },

    /// Score a sequence of guesses against a secret, turn by turn
    Coach {
        /// Your guesses, in order
        #[arg(required = true, num_args = 1..=6)]
        guesses: Vec<String>,

        /// Secret word (default: random dictionary word)
        #[arg(short, long)]
        secret: Option<String>,

        /// Seed for choosing the random secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the solver play against a secret
    Replay {
        /// The secret word
        secret: String,

        /// Maximum number of guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of dictionary words to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("failed to load {}", path.display()))
}

fn parse_turns(turns: &[String]) -> Result<Vec<Turn>> {
    turns
        .iter()
        .map(|t| parse_turn(t).with_context(|| format!("invalid turn {t:?}")))
        .collect()
}

/// Log contradictions before handing them to anyhow
fn warn_contradiction<T>(result: wordle_coach::Result<T>) -> wordle_coach::Result<T> {
    if let Err(Error::Contradiction) = &result {
        log::warn!("no dictionary word fits the given feedback");
    }
    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.plain {
        colored::control::set_override(false);
    }
    let renderer = renderer_for(cli.plain, cli.share);

    let dictionary = match &cli.wordlist {
        Some(path) => load_words(path)?,
        None => default_dictionary(),
    };
    let guess_pool = cli.guess_pool.as_deref().map(load_words).transpose()?;

    let mut solver = Solver::new(&dictionary);
    if let Some(pool) = &guess_pool {
        solver = solver.with_guess_pool(pool);
    }
    log::info!("dictionary has {} words", dictionary.len());

    match cli.command {
        Commands::Feedback { guess, secret } => {
            let result = run_feedback(&guess, &secret)?;
            print_feedback(&result, renderer.as_ref());
        }
        Commands::Suggest { turns, top } => {
            let history = parse_turns(&turns)?;
            let result = warn_contradiction(suggest(&solver, &history, top))?;
            print_suggestions(&result);
        }
        Commands::Analyze { word, turns } => {
            let history = parse_turns(&turns)?;
            let result = warn_contradiction(analyze_word(&solver, &word, &history))?;
            print_analysis_result(&result);
        }
        Commands::Coach {
            guesses,
            secret,
            seed,
        } => {
            let secret = match secret {
                Some(s) => Word::new(&s)?,
                None => pick_secret(&dictionary, seed).ok_or(Error::EmptyDictionary)?,
            };
            let guesses = guesses
                .iter()
                .map(|g| Word::new(g))
                .collect::<wordle_coach::Result<Vec<_>>>()?;

            let result = warn_contradiction(coach(&solver, secret, &guesses))?;
            print_coach_result(&result, renderer.as_ref(), cli.verbose > 0);
        }
        Commands::Replay {
            secret,
            max_guesses,
        } => {
            let mut config = ReplayConfig::new(Word::new(&secret)?);
            config.max_guesses = max_guesses;

            let result = warn_contradiction(replay(&solver, config))?;
            print_replay_result(&result, renderer.as_ref(), true);
        }
        Commands::Benchmark { count } => {
            let count = count.unwrap_or(dictionary.len()).min(dictionary.len());
            println!("Running benchmark on {count} words...");

            let result = run_benchmark(&solver, &dictionary[..count], true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
