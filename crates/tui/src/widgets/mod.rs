//! Widget components for the stickyfoot TUI.
//!
//! This module provides the rendering functions for the screen, organized
//! into focused submodules.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. This enables easy testing
//! and composition.
//!
//! # Modules
//!
//! - [`boxed`]: Renders a single styled text box
//! - [`screen`]: Renders the whole screen (container, header, body, footer)
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use stickyfoot_config::Theme;
//! use stickyfoot_protocol::{Message, ScreenModel, demo::demo_single_content};
//! use stickyfoot_tui::widgets;
//!
//! let mut model = ScreenModel::new(demo_single_content());
//! model.apply(Message::Resize { width: 60, height: 16 });
//!
//! let area = Rect::new(0, 0, 60, 16);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_screen(&model, &Theme::default(), area, &mut buf);
//! ```

pub mod boxed;
pub mod screen;

// Re-export primary rendering functions for convenience
pub use boxed::{render_box, render_frame};
pub use screen::{LOADING_PLACEHOLDER, render_screen};
