//! Terminal UI for the stickyfoot application.
//!
//! This crate provides a Ratatui-based terminal interface that draws a
//! header, a body and a footer pinned to the bottom of the terminal, however
//! tall the body content is.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`layout`]: Box-model layout arithmetic
//! - [`widgets`]: Rendering of the screen into a buffer
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event sources and key mappings
//!
//! # Example
//!
//! ```no_run
//! use stickyfoot_config::Theme;
//! use stickyfoot_protocol::demo::demo_content;
//! use stickyfoot_tui::{App, event::CrosstermEvents, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(demo_content(), Theme::default());
//!     let result = app.run(&mut terminal, &mut CrosstermEvents::default()).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use layout::ScreenLayout;
