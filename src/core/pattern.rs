//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one [`Mark`] per position and serializes to a five-character
//! string:
//! - uppercase letter = exact match
//! - lowercase letter = present elsewhere
//! - `-` = absent

use super::word::{WORD_LENGTH, Word};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position. Letters are stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is in the secret at this position
    Exact(u8),
    /// Letter is in the secret at another, not yet accounted for, position
    Elsewhere(u8),
    /// Letter is not in the secret (or every occurrence is already used)
    Absent,
}

impl Mark {
    /// Serialized character for this mark
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Exact(letter) => letter.to_ascii_uppercase() as char,
            Self::Elsewhere(letter) => letter as char,
            Self::Absent => '-',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Self::Absent),
            'A'..='Z' => Some(Self::Exact(ch.to_ascii_lowercase() as u8)),
            'a'..='z' => Some(Self::Elsewhere(ch as u8)),
            _ => None,
        }
    }

    /// Letter this mark refers to, if any
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Exact(letter) | Self::Elsewhere(letter) => Some(letter),
            Self::Absent => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Mark; WORD_LENGTH]);

impl Pattern {
    /// Create a pattern from individual marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Get the marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Calculate the pattern when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: mark positions where the letters agree and consume that
    ///    secret letter
    /// 2. Elsewhere pass, left to right: an unmarked guess letter that still
    ///    occurs in the unconsumed secret letters is marked present and consumes
    ///    the leftmost such occurrence
    ///
    /// A guess letter is therefore never marked more often than the secret
    /// contains it, and surplus duplicates are left absent from the right.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::{Pattern, Word};
    ///
    /// let guess = Word::new("mommy").unwrap();
    /// let secret = Word::new("madam").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &secret).to_string(), "M-m--");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut remaining: [Option<u8>; WORD_LENGTH] = secret.letters().map(Some);
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                marks[i] = Mark::Exact(g);
                remaining[i] = None;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Mark::Absent
                && let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g))
            {
                *mark = Mark::Elsewhere(g);
                *slot = None;
            }
        }

        Self(marks)
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|mark| matches!(mark, Mark::Exact(_)))
    }

    /// Count the exact-match positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0
            .iter()
            .filter(|mark| matches!(mark, Mark::Exact(_)))
            .count()
    }

    /// Count the present-elsewhere positions
    #[must_use]
    pub fn count_elsewhere(&self) -> usize {
        self.0
            .iter()
            .filter(|mark| matches!(mark, Mark::Elsewhere(_)))
            .count()
    }

    /// Check that every lettered mark carries the guess letter at its position
    #[must_use]
    pub fn fits_guess(&self, guess: &Word) -> bool {
        self.0
            .iter()
            .zip(guess.letters())
            .all(|(mark, &g)| mark.letter().is_none_or(|letter| letter == g))
    }

    /// Parse a serialized pattern such as `"-e-E-"`
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] unless the input is exactly five
    /// characters drawn from `A-Z`, `a-z` and `-`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPattern(s.to_string());

        if s.chars().count() != WORD_LENGTH {
            return Err(invalid());
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(s.chars()) {
            *mark = Mark::from_char(ch).ok_or_else(invalid)?;
        }

        Ok(Self(marks))
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Compare two raw tokens and return the feedback pattern
///
/// Both tokens are case-folded before comparison.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if either token is not exactly five
/// characters, or [`Error::InvalidCharacters`] if either contains anything
/// other than letters. No pattern is produced for malformed input.
///
/// # Examples
/// ```
/// use wordle_coach::core::encode;
///
/// assert_eq!(encode("lever", "EATEN").unwrap().to_string(), "-e-E-");
/// assert!(encode("lever", "eat").is_err());
/// ```
pub fn encode(guess: &str, secret: &str) -> Result<Pattern> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(Pattern::calculate(&guess, &secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pattern(guess: &str, secret: &str) -> String {
        encode(guess, secret).unwrap().to_string()
    }

    #[test]
    fn literal_cases() {
        assert_eq!(pattern("lever", "EATEN"), "-e-E-");
        assert_eq!(pattern("LEVER", "LOWER"), "L--ER");
        assert_eq!(pattern("MOMMY", "MADAM"), "M-m--");
        assert_eq!(pattern("ARGUE", "MOTTO"), "-----");
    }

    #[test]
    fn pattern_all_exact() {
        let word = Word::new("crane").unwrap();
        let pattern = Pattern::calculate(&word, &word);

        assert!(pattern.is_solved());
        assert_eq!(pattern.to_string(), "CRANE");
        assert_eq!(pattern.count_exact(), 5);
    }

    #[test]
    fn duplicate_guess_letter_marks_leftmost_only() {
        // One E left in the secret after the exact match, so only the first
        // unmatched E is marked
        assert_eq!(pattern("geese", "creep"), "-eE--");
        assert_eq!(pattern("speed", "erase"), "s-ee-");
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_elsewhere() {
        // The O at position 3 is exact, so the O at position 1 uses the other O
        assert_eq!(pattern("robot", "floor"), "ro-O-");
        // Only one O in the secret, so the second O stays absent
        assert_eq!(pattern("robot", "flown"), "-o---");
        assert_eq!(pattern("oozed", "ozone"), "Ooze-");
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(pattern("CrAnE", "sLaTe"), "--A-E");
    }

    #[test]
    fn encode_rejects_wrong_length() {
        assert!(matches!(encode("lever", "eat"), Err(Error::InvalidLength(3))));
        assert!(matches!(encode("levers", "eaten"), Err(Error::InvalidLength(6))));
        assert!(matches!(encode("", "eaten"), Err(Error::InvalidLength(0))));
    }

    #[test]
    fn encode_rejects_non_letters() {
        assert!(matches!(
            encode("lev3r", "eaten"),
            Err(Error::InvalidCharacters(_))
        ));
    }

    #[test]
    fn parse_accepts_serialized_form() {
        let parsed = Pattern::parse("-e-E-").unwrap();
        assert_eq!(
            parsed.marks(),
            &[
                Mark::Absent,
                Mark::Elsewhere(b'e'),
                Mark::Absent,
                Mark::Exact(b'e'),
                Mark::Absent,
            ]
        );
        assert_eq!(parsed.to_string(), "-e-E-");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Pattern::parse("-e-E").is_err());
        assert!(Pattern::parse("-e-E--").is_err());
        assert!(Pattern::parse("-e_E-").is_err());
        assert!(Pattern::parse("-e1E-").is_err());
        assert!(Pattern::parse("").is_err());
    }

    #[test]
    fn fits_guess_checks_letters() {
        let guess = Word::new("lever").unwrap();
        assert!(Pattern::parse("-e-E-").unwrap().fits_guess(&guess));
        assert!(Pattern::parse("-----").unwrap().fits_guess(&guess));
        assert!(!Pattern::parse("-a-E-").unwrap().fits_guess(&guess));
    }

    #[test]
    fn counts_marks() {
        let p = Pattern::parse("Ro-O-").unwrap();
        assert_eq!(p.count_exact(), 2);
        assert_eq!(p.count_elsewhere(), 1);
        assert!(!p.is_solved());
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-e]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn every_symbol_is_well_formed(guess in word_strategy(), secret in word_strategy()) {
            let text = Pattern::calculate(&guess, &secret).to_string();
            prop_assert_eq!(text.chars().count(), 5);
            prop_assert!(text.chars().all(|c| c == '-' || c.is_ascii_alphabetic()));
        }

        #[test]
        fn reflexive_pattern_is_solved(word in word_strategy()) {
            prop_assert!(Pattern::calculate(&word, &word).is_solved());
        }

        #[test]
        fn marked_letters_never_exceed_secret_count(guess in word_strategy(), secret in word_strategy()) {
            let pattern = Pattern::calculate(&guess, &secret);
            for letter in b'a'..=b'e' {
                let marked = pattern
                    .marks()
                    .iter()
                    .filter(|mark| mark.letter() == Some(letter))
                    .count();
                prop_assert!(marked <= secret.count_of(letter));
            }
        }

        #[test]
        fn serialized_form_parses_back(guess in word_strategy(), secret in word_strategy()) {
            let pattern = Pattern::calculate(&guess, &secret);
            prop_assert_eq!(Pattern::parse(&pattern.to_string()).unwrap(), pattern);
            prop_assert!(pattern.fits_guess(&guess));
        }
    }
}
