//! The screen model and its lifecycle.
//!
//! The [`ScreenModel`] is the single state object of the application. It
//! holds the static [`ScreenContent`] and a [`Phase`] that tracks the last
//! known terminal size.

use crate::content::ScreenContent;
use crate::message::Message;

/// Lifecycle phase of the screen model.
///
/// ```text
/// Uninitialized --Resize(w,h)--> Sized(w,h) --Resize(w',h')--> Sized(w',h')
///       \                            |
///        +----------Quit-------------+--------> Terminated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No usable terminal size has been received yet.
    #[default]
    Uninitialized,
    /// The terminal size is known.
    Sized {
        /// Terminal width in columns.
        width: u16,
        /// Terminal height in rows.
        height: u16,
    },
    /// The application asked to exit. Final.
    Terminated,
}

impl Phase {
    /// Returns the phase reached after applying `msg`.
    ///
    /// A resize with a zero dimension leaves the model unsized, and nothing
    /// leaves [`Phase::Terminated`].
    ///
    /// # Examples
    ///
    /// ```
    /// use stickyfoot_protocol::{Message, Phase};
    ///
    /// let phase = Phase::Uninitialized.next(Message::Resize { width: 80, height: 24 });
    /// assert_eq!(phase, Phase::Sized { width: 80, height: 24 });
    /// assert_eq!(phase.next(Message::Quit), Phase::Terminated);
    /// ```
    #[must_use]
    pub fn next(self, msg: Message) -> Self {
        match (self, msg) {
            (Self::Terminated, _) | (_, Message::Quit) => Self::Terminated,
            (_, Message::Resize { width, height }) if width == 0 || height == 0 => {
                Self::Uninitialized
            }
            (_, Message::Resize { width, height }) => Self::Sized { width, height },
        }
    }
}

/// The screen model: static content plus the current [`Phase`].
///
/// # Examples
///
/// ```
/// use stickyfoot_protocol::{Message, ScreenModel, demo::demo_content};
///
/// let mut model = ScreenModel::new(demo_content());
/// assert_eq!(model.size(), None);
///
/// model.apply(Message::Resize { width: 80, height: 24 });
/// assert_eq!(model.size(), Some((80, 24)));
///
/// model.apply(Message::Quit);
/// assert!(model.is_terminated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    phase: Phase,
    content: ScreenContent,
}

impl ScreenModel {
    /// Creates an unsized model holding `content`.
    #[must_use]
    pub fn new(content: ScreenContent) -> Self {
        Self {
            phase: Phase::Uninitialized,
            content,
        }
    }

    /// Applies a message to the model.
    pub fn apply(&mut self, msg: Message) {
        self.phase = self.phase.next(msg);
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the static screen content.
    #[must_use]
    pub fn content(&self) -> &ScreenContent {
        &self.content
    }

    /// Returns the last known `(width, height)`, if the model is sized.
    #[must_use]
    pub fn size(&self) -> Option<(u16, u16)> {
        match self.phase {
            Phase::Sized { width, height } => Some((width, height)),
            Phase::Uninitialized | Phase::Terminated => None,
        }
    }

    /// Returns `true` once a quit message has been applied.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }
}
