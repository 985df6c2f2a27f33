//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary, loading of
//! custom lists, and the `Dictionary` type used by rounds.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use anyhow::Result;

/// Where the dictionary comes from: `embedded` or a file path
///
/// # Errors
///
/// Returns an error if a custom file cannot be read or has no valid words.
pub fn load_dictionary(source: &str) -> Result<Dictionary> {
    match source {
        "embedded" | "default" => Ok(Dictionary::embedded()?),
        path => loader::load_from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase_five_letters() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(DICTIONARY_COUNT, 999, "Expected 999 dictionary words");
    }

    #[test]
    fn load_dictionary_defaults_to_embedded() {
        assert_eq!(load_dictionary("embedded").unwrap().len(), DICTIONARY_COUNT);
        assert!(load_dictionary("missing-word-list.txt").is_err());
    }
}
