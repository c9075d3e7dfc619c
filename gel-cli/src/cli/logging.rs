//! # Logging
//!
//! Console and file logging for the `gel` process.
//!
//! Records go to stderr and are appended to `<logging path>/gel.log`. `RUST_LOG` takes precedence
//! over the level chosen on the command line.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::args::{LoggingConfig, LoggingLevel};
use super::error::print_warning;

/// Name of the log file inside the logging directory
pub const LOG_FILE_NAME: &str = "gel.log";

/// Filter for `level`, unless overridden by `RUST_LOG`
pub fn env_filter(level: LoggingLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

/// Path of the log file for a logging directory
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Open the log file in append mode, creating its directory when missing
pub fn open_log_file(dir: &Path) -> anyhow::Result<File> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create logging directory {}", dir.display()))?;

    let path = log_file_path(dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Install the process-wide logger
///
/// If the log file cannot be opened, logging continues on the console only.
pub fn configure_logger(config: &LoggingConfig) -> anyhow::Result<()> {
    let file_layer = match open_log_file(&config.path) {
        Ok(file) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        ),
        Err(e) => {
            print_warning(&format!("Logging to file disabled: {:#}", e));
            None
        }
    };

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(config.level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}
