//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a newline-separated file
///
/// Blank lines are skipped silently; lines that are not 5-letter words are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let dictionary = parse_word_list(&content)
        .with_context(|| format!("No usable words in {}", path.display()))?;

    log::info!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse newline-separated words into a dictionary
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if no line holds a valid word.
pub fn parse_word_list(content: &str) -> Result<Dictionary, DictionaryError> {
    let words = content.lines().enumerate().filter_map(|(n, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match Word::new(trimmed) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("Skipping line {}: '{trimmed}': {e}", n + 1);
                None
            }
        }
    });

    Dictionary::new(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
