//! Configuration for the stickyfoot application.
//!
//! All settings are built-in defaults gathered into a single [`Config`]
//! object that is constructed once at startup and passed explicitly to the
//! renderer and the logging setup.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct
//! - [`theme`]: Box styles, the palette, and the theme
//! - [`logging`]: Log file location and filter
//! - [`error`]: Error types for configuration validation
//!
//! # Examples
//!
//! ```
//! use stickyfoot_config::Config;
//!
//! let config = Config::default();
//! config.validate().expect("defaults are valid");
//!
//! let (w, h) = config.theme.container.frame_size();
//! println!("container frame: {w}x{h}");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod theme;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LogConfig;
pub use theme::{BoxStyle, Theme, palette};
