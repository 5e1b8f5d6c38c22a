//! Five-letter word representation
//!
//! Words are stored lowercase; display is uppercase.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated five-letter word over A-Z
///
/// Construction folds case, so `Word::new("CRANE") == Word::new("crane")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if the input is not exactly five
    /// characters, and [`Error::InvalidCharacters`] if any of them is not an
    /// ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Word;
    ///
    /// let word = Word::new("CrAnE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(Error::InvalidLength(length));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(Error::InvalidCharacters(text.to_string()));
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }

        Ok(Self { letters })
    }

    /// Get the lowercase letters as bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the lowercase letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Lowercase text of the word
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// Number of times `letter` (lowercase) occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&b| b == letter).count()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", char::from(b.to_ascii_uppercase()))?;
        }
        Ok(())
    }
}
