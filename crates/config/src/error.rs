//! Error types for configuration operations.
//!
//! This module defines the errors reported when a configuration object
//! fails validation.

use std::path::PathBuf;

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The log path does not name a file.
    #[error("invalid log file path: {}", .0.display())]
    InvalidLogPath(PathBuf),

    /// The log filter directive is blank.
    #[error("log filter must not be empty")]
    EmptyLogFilter,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
