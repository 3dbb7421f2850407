//! Shared protocol types for the stickyfoot application.
//!
//! This crate defines the core types used across all stickyfoot components:
//! the static screen content, the messages that drive the application, and
//! the screen model state machine.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`content`]: Header, body, and footer text
//! - [`message`]: Messages produced by the input handler
//! - [`screen`]: The `ScreenModel` and its lifecycle `Phase`
//! - [`demo`]: Built-in demo content
//!
//! # Examples
//!
//! ```
//! use stickyfoot_protocol::{Message, Phase, ScreenModel, demo::demo_content};
//!
//! let mut model = ScreenModel::new(demo_content());
//! model.apply(Message::Resize { width: 80, height: 24 });
//! assert_eq!(model.phase(), Phase::Sized { width: 80, height: 24 });
//! ```

pub mod content;
pub mod demo;
pub mod message;
pub mod screen;

// Re-export primary types at crate root for convenience
pub use content::{Body, ScreenContent};
pub use message::Message;
pub use screen::{Phase, ScreenModel};
