//! Word lists for Wordle solving
//!
//! The default dictionary is embedded in the binary; other lists can be
//! loaded from plain text files, one word per line.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{default_dictionary, load_from_file, parse_words};
