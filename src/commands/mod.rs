//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreResult, score_words};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulationConfig, SimulationResult, play_automatically, run_simulation};
