//! Rendering a guess and its feedback as one row

use super::formatters::pattern_to_emoji;
use crate::core::{Mark, Pattern, Word};
use colored::Colorize;

/// Turns a guess and its feedback into something to show the player
pub trait Renderer {
    fn render(&self, guess: &Word, pattern: &Pattern) -> String;
}

/// Uppercase guess followed by the serialized pattern, e.g. `LEVER -e-E-`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, guess: &Word, pattern: &Pattern) -> String {
        format!("{guess} {pattern}")
    }
}

/// Letter tiles with green, yellow and gray backgrounds
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredRenderer;

impl Renderer for ColoredRenderer {
    fn render(&self, guess: &Word, pattern: &Pattern) -> String {
        guess
            .letters()
            .iter()
            .zip(pattern.marks())
            .map(|(&letter, mark)| {
                let tile = format!(" {} ", letter.to_ascii_uppercase() as char);
                match mark {
                    Mark::Exact(_) => tile.black().on_green().bold().to_string(),
                    Mark::Elsewhere(_) => tile.black().on_yellow().bold().to_string(),
                    Mark::Absent => tile.white().on_bright_black().bold().to_string(),
                }
            })
            .collect()
    }
}

/// Emoji squares only, the way results are usually shared
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiRenderer;

impl Renderer for EmojiRenderer {
    fn render(&self, _guess: &Word, pattern: &Pattern) -> String {
        pattern_to_emoji(pattern)
    }
}

/// Renderer for the `--plain` and `--share` flags; `share` wins
#[must_use]
pub fn renderer_for(plain: bool, share: bool) -> Box<dyn Renderer> {
    if share {
        Box::new(EmojiRenderer)
    } else if plain {
        Box::new(PlainRenderer)
    } else {
        Box::new(ColoredRenderer)
    }
}
