//! Core domain types for Wordle
//!
//! Words, per-letter statuses, guess scoring and keyboard aggregation.
//! Everything here is pure and independent of any front end.

mod keyboard;
mod score;
mod status;
mod word;

pub use keyboard::{KeyStatus, KeyboardState};
pub use score::Score;
pub use status::LetterStatus;
pub use word::{WORD_LEN, Word, WordError};
