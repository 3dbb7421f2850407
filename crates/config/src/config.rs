//! Core configuration struct.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the stickyfoot application.

use crate::error::Result;
use crate::logging::LogConfig;
use crate::theme::Theme;

/// The main configuration struct for the stickyfoot application.
///
/// Built once at startup and passed explicitly to the components that need
/// it; nothing reads configuration from process-wide state.
///
/// # Examples
///
/// ```
/// use stickyfoot_config::{Config, LogConfig, Theme};
///
/// // The built-in defaults
/// let config = Config::default();
/// assert!(config.validate().is_ok());
///
/// // A custom config
/// let config = Config {
///     theme: Theme::plain(),
///     log: LogConfig::default(),
/// };
/// assert_eq!(config.theme, Theme::plain());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Styles of every screen region.
    pub theme: Theme,

    /// Diagnostic log settings.
    pub log: LogConfig,
}

impl Config {
    /// Creates the default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use stickyfoot_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.log.path = PathBuf::new();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.log.validate()?;
        Ok(())
    }
}
