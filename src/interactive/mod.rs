//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Reveal, run_tui};
