//! Static screen content.
//!
//! The text shown in each region of the screen is fixed when the model is
//! created and never changes afterwards.

/// Content of the body region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A single block of text filling the whole body.
    Single(String),
    /// Two panes joined side by side, each half the body width.
    Split {
        /// Text of the left pane.
        left: String,
        /// Text of the right pane.
        right: String,
    },
}

impl Body {
    /// Returns `true` if the body is split into two panes.
    #[must_use]
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

/// The text of every screen region.
///
/// # Examples
///
/// ```
/// use stickyfoot_protocol::{Body, ScreenContent};
///
/// let content = ScreenContent::new("Title", Body::Single("Hello".into()), "Bye");
/// assert_eq!(content.header, "Title");
/// assert!(!content.body.is_split());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    /// Header text, rendered centered above the body.
    pub header: String,
    /// Body content.
    pub body: Body,
    /// Footer text, rendered centered below the body.
    pub footer: String,
}

impl ScreenContent {
    /// Creates screen content from its three regions.
    #[must_use]
    pub fn new(header: impl Into<String>, body: Body, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body,
            footer: footer.into(),
        }
    }
}
