//! Wordle
//!
//! A single-player Wordle game: guess a hidden 5-letter word in six tries,
//! with per-letter feedback and an aggregated keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Score, Word};
//! use wordle_game::game::{Event, Input, Round};
//! use wordle_game::wordlists::Dictionary;
//!
//! // Score a guess directly
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//! assert_eq!(Score::calculate(guess, secret).to_string(), "-GGYG");
//!
//! // Or play a round
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut round = Round::with_secret(&dictionary, secret);
//! let mut last = Ok(Event::Ignored);
//! for input in Input::for_word("crane") {
//!     last = round.apply(input);
//! }
//! assert!(matches!(last, Ok(Event::Won { row: 0, .. })));
//! ```

// Core domain types
pub mod core;

// Board geometry and timings
pub mod config;

// Round state machine and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;
