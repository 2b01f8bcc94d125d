//! Diagnostic tracing setup.
//!
//! The interactive session owns the terminal, so it only logs when a file is
//! given. One-shot subcommands log to stderr.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "ALIVEGPT_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| -> Box<dyn Error> { err })?;
    Ok(())
}

pub fn init_stderr_logging() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| -> Box<dyn Error> { err })?;
    Ok(())
}
