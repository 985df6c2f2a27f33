//! Dictionary of playable words
//!
//! The same list serves as the secret pool and as the guess-validity check.

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary must contain at least one word"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Immutable, non-empty set of valid words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(Word::new("SLATE").unwrap()));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| index.insert(*w)).collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is empty, which the build script rules out.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(super::loader::words_from_slice(super::DICTIONARY))
    }

    #[must_use]
    pub fn contains(&self, word: Word) -> bool {
        self.index.contains(&word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a secret uniformly at random
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Non-empty by construction
        self.words[rng.random_range(0..self.words.len())]
    }
}
