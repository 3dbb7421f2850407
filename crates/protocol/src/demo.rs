//! Demo content shown by the stickyfoot binary.
//!
//! # Examples
//!
//! ```
//! use stickyfoot_protocol::demo::{demo_content, demo_single_content};
//!
//! assert!(demo_content().body.is_split());
//! assert!(!demo_single_content().body.is_split());
//! ```

use crate::content::{Body, ScreenContent};

/// Header text of the demo screen.
pub const HEADER_TEXT: &str = "Header Title";

/// Footer text of the demo screen.
pub const FOOTER_TEXT: &str = "Footer — press q to quit";

/// Body text of the single-body demo screen.
pub const BODY_TEXT: &str = "This is the body content that can either grow or shrink to fill available space.

It can contain multiple lines of text, and may be constrained by the terminal height to prevent header and footer from overflowing.

Or, overflowing may be desired.

This various approaches to layout management in for TUI applications using lipgloss.

Try lipgloss, you'll definitely love it!

I promise.";

/// Left pane text of the split demo screen.
pub const LEFT_PANE_TEXT: &str = "[Left Pane]\n\nNot a lot of content here.";

/// Right pane text of the split demo screen.
pub const RIGHT_PANE_TEXT: &str =
    "[Right Pane]\n\nMore content here\nthan in the left pane so it will likely require more vertical space.";

/// Returns the split-body demo content (left and right panes).
#[must_use]
pub fn demo_content() -> ScreenContent {
    ScreenContent::new(
        HEADER_TEXT,
        Body::Split {
            left: LEFT_PANE_TEXT.to_string(),
            right: RIGHT_PANE_TEXT.to_string(),
        },
        FOOTER_TEXT,
    )
}

/// Returns the single-body demo content.
#[must_use]
pub fn demo_single_content() -> ScreenContent {
    ScreenContent::new(HEADER_TEXT, Body::Single(BODY_TEXT.to_string()), FOOTER_TEXT)
}
