//! `tracing` subscriber setup.
//!
//! The game owns the terminal, so its logs go to `~/.skyward/skyward.log`.
//! The simulator logs to stderr. Both read their filter from `SKYWARD_LOG`
//! (for example `SKYWARD_LOG=skyward=debug`).

use super::persistence::save_path;
use crate::core::constants::LOG_FILENAME;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SKYWARD_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append logs to `~/.skyward/skyward.log`.
pub fn init_file_logging() -> io::Result<()> {
    let path = save_path(LOG_FILENAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Log warnings and errors to stderr.
pub fn init_stderr_logging() {
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .try_init();
}
