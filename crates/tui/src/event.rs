//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stickyfoot_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// A source of terminal events.
///
/// The run loop reads events through this trait so it can be driven by a
/// scripted source in tests instead of a real terminal.
pub trait EventSource {
    /// Waits a bounded time for the next event.
    ///
    /// Returns `Ok(None)` if no event arrived before the source's timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn poll_event(&mut self) -> std::io::Result<Option<Event>>;
}

/// Reads events from the real terminal through crossterm.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermEvents {
    timeout: Duration,
}

impl Default for CrosstermEvents {
    fn default() -> Self {
        Self {
            timeout: POLL_TIMEOUT,
        }
    }
}

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self) -> std::io::Result<Option<Event>> {
        if event::poll(self.timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Converts a terminal event to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Only key presses are considered; release and repeat events are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `q` | Quit |
/// | `Esc` | Quit |
/// | `Ctrl+C` | Quit |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode delivers Ctrl+C as a key rather than a signal
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}
