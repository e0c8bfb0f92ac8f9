//! Log file setup
//!
//! The terminal is fully taken by the canvas, so tracing output goes to a
//! file instead: `<state dir>/termpaint/termpaint.log`, falling back to the
//! cache directory on platforms without a state dir. `RUST_LOG` overrides
//! the configured level.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where the log file lives, if a suitable directory exists.
pub fn log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("termpaint").join("termpaint.log"))
}

/// Build the level filter from `RUST_LOG`, falling back to `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log path, or `None` when no log directory is available
/// (logging is then disabled).
pub fn init(default_level: &str) -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    tracing_subscriber::registry()
        .with(filter(default_level))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(path))
}
