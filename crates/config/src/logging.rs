//! Diagnostic log settings.
//!
//! The application writes its diagnostics to an append-only file in the
//! working directory; the terminal itself is owned by the UI.

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Default filter directive for the log subscriber.
pub const DEFAULT_LOG_FILTER: &str = "debug";

/// Where and how verbosely to log.
///
/// # Examples
///
/// ```
/// use stickyfoot_config::LogConfig;
///
/// let log = LogConfig::default();
/// assert_eq!(log.path.to_str(), Some("debug.log"));
/// assert!(log.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file path. Opened in append mode, created if absent.
    pub path: PathBuf,
    /// Filter directive, in `tracing-subscriber` `EnvFilter` syntax.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Validates the log settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not name a file or the filter is blank.
    pub fn validate(&self) -> Result<()> {
        if self.path.file_name().is_none() {
            return Err(ConfigError::InvalidLogPath(self.path.clone()));
        }
        if self.filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}
