//! Logger setup
//!
//! `env_logger` behind the `log` facade. `RUST_LOG` always overrides the
//! chosen level. With a log file, records go there instead of stderr so the
//! terminal UI is not overwritten.

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;
use std::fs::File;
use std::path::Path;

/// Initialize logging
///
/// # Behavior
/// - `debug` selects `Debug`, otherwise `default_level`
/// - `RUST_LOG`, when set, replaces the level filter
/// - `log_file` redirects output to a freshly truncated file
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logger(debug: bool, default_level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        default_level
    };

    let mut builder = Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
    Ok(())
}
