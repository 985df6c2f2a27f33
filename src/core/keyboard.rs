//! Aggregated per-key feedback
//!
//! Each letter key remembers the strongest status it has received in the
//! current round. Statuses only ever move up.

use super::{LetterStatus, Score, Word};

/// Best status seen so far for one key
///
/// Ordered by priority: `Unused < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<LetterStatus> for KeyStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Absent => Self::Absent,
            LetterStatus::Present => Self::Present,
            LetterStatus::Correct => Self::Correct,
        }
    }
}

/// Keyboard projection of a round: letter `A`..=`Z` to best status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [KeyStatus; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the keyboard
    ///
    /// A key is only upgraded, never downgraded.
    pub fn record(&mut self, guess: Word, score: Score) {
        for (&letter, &status) in guess.letters().iter().zip(score.statuses()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.keys[i]) {
                *slot = (*slot).max(status.into());
            }
        }
    }

    /// Status of a letter key; non-letters report `Unused`
    #[must_use]
    pub fn status(&self, letter: u8) -> KeyStatus {
        Self::index(letter).map_or(KeyStatus::Unused, |i| self.keys[i])
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, KeyStatus)> + '_ {
        (b'A'..=b'Z').zip(self.keys.iter().copied())
    }

    fn index(letter: u8) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper.is_ascii_uppercase().then(|| usize::from(upper - b'A'))
    }
}
