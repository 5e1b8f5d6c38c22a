//! Error type shared by the solver core and the word list loader

use crate::core::Word;
use thiserror::Error;

/// The errors that `wordle_coach` can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// A token was not exactly five characters long.
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    /// A five-character token contained something other than A-Z.
    #[error("word \"{0}\" must contain only the letters A-Z")]
    InvalidCharacters(String),

    /// A serialized feedback string could not be read as a pattern.
    #[error("\"{0}\" is not a valid feedback pattern")]
    InvalidPattern(String),

    /// No candidate is consistent with every (guess, pattern) pair seen so far.
    #[error("no candidate word is consistent with the guess history")]
    Contradiction,

    /// Percentile scoring was asked to rank against an empty table.
    #[error("cannot score a guess against an empty information table")]
    EmptyTable,

    /// The dictionary provider produced no usable words.
    #[error("the dictionary contains no five-letter words")]
    EmptyDictionary,

    /// The word has no entry in the information table.
    #[error("\"{0}\" has no entry in the information table")]
    NotInTable(Word),

    /// A guess or secret that no word list knows about.
    #[error("\"{0}\" is not in the word list")]
    UnknownWord(Word),

    #[error("could not read word list")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
