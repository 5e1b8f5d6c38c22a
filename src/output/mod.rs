//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod renderer;

pub use display::{
    commentary, print_analysis_result, print_benchmark_result, print_coach_result,
    print_feedback, print_replay_result, print_suggestions,
};
pub use renderer::{ColoredRenderer, EmojiRenderer, PlainRenderer, Renderer, renderer_for};
