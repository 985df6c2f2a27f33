//! Score command
//!
//! Scores one guess against one secret without playing a round.

use crate::core::{Score, Word};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};

/// Result of scoring a single guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub score: Score,
    /// Whether the guess would be accepted in a round
    pub guess_in_dictionary: bool,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in the dictionary; membership is only reported.
///
/// # Errors
///
/// Returns an error if either argument is not a 5-letter word.
pub fn score_words(guess: &str, secret: &str, dictionary: &Dictionary) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;

    Ok(ScoreResult {
        guess,
        secret,
        score: Score::calculate(guess, secret),
        guess_in_dictionary: dictionary.contains(guess),
    })
}
