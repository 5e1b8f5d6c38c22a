//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WORDS;
use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse a word list, one word per line
///
/// Lines are trimmed and blank lines skipped. Words are folded to lowercase,
/// invalid entries are skipped, and duplicates keep their first position.
///
/// # Errors
///
/// Returns [`Error::EmptyDictionary`] if no valid word remains.
///
/// # Examples
/// ```
/// use wordle_coach::wordlists::parse_words;
///
/// let words = parse_words("crane\nSLATE\n\ncrane\ntoolong\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match Word::new(line) {
            Ok(word) => {
                if seen.insert(word) {
                    words.push(word);
                } else {
                    log::debug!("skipping duplicate word {line:?}");
                }
            }
            Err(e) => log::debug!("skipping {line:?}: {e}"),
        }
    }

    if words.is_empty() {
        return Err(Error::EmptyDictionary);
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::EmptyDictionary`] if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_coach::wordlists::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content)?;

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The embedded dictionary as words
#[must_use]
pub fn default_dictionary() -> Vec<Word> {
    words_from_slice(WORDS)
}
