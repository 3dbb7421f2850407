//! File-backed diagnostic logging.
//!
//! The terminal belongs to the UI while the app runs, so diagnostics go to a
//! log file through a non-blocking writer instead of stderr.

use std::{
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use stickyfoot_config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened or created.
    #[error("failed to open log file {}: {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Opens `path` for appending, creating it if absent.
///
/// # Errors
///
/// Returns [`LoggingError::OpenLogFile`] if the file cannot be opened.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global subscriber writing to the configured log file.
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered lines are flushed on exit.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the filter is invalid, or
/// a subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, LoggingError> {
    let file = open_log_file(&config.path)?;
    let filter = EnvFilter::try_new(&config.filter)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}
