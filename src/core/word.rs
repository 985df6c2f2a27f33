//! Wordle word representation
//!
//! A Word is exactly five ASCII letters, stored uppercase as raw bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
///
/// Cheap to copy; equality and hashing are case-insensitive because the
/// letters are normalised to uppercase on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Self::from_letters(bytes)
    }

    /// Create a Word from five raw letters, normalising to uppercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LEN]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Get the word as a string slice (always uppercase)
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII, so this never falls back.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count how many times `letter` occurs in the word
    #[must_use]
    pub fn occurrences(self, letter: u8) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().map(|&b| usize::from(b == letter)).sum()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by scoring to track unconsumed secret letters.
    #[inline]
    pub(crate) fn letter_counts(self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
