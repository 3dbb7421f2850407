//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the input handler (and the interrupt-signal listener) and the screen model.

/// Messages that drive the screen model.
///
/// These messages are produced by the input handler and consumed by
/// the [`ScreenModel`](crate::ScreenModel) to update its state.
///
/// # Examples
///
/// ```
/// use stickyfoot_protocol::Message;
///
/// let msg = Message::Resize { width: 80, height: 24 };
/// assert!(matches!(msg, Message::Resize { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use stickyfoot_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Resize { width: 1, height: 1 }.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
