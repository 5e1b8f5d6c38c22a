//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod coach;
pub mod feedback;
pub mod replay;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use coach::{CoachResult, CoachTurn, coach, pick_secret};
pub use feedback::{FeedbackResult, run_feedback};
pub use replay::{GuessStep, MAX_GUESSES, ReplayConfig, ReplayResult, replay};
pub use suggest::{SuggestResult, suggest};
