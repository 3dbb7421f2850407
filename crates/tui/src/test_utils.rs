//! Test utilities for the TUI crate.
//!
//! This module provides common helpers used across test modules for
//! rendering verification, snapshot testing, and driving the event loop.

use std::collections::VecDeque;
use std::io;

use crossterm::event::Event;
use ratatui::buffer::Buffer;

use crate::event::EventSource;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line to produce cleaner output suitable
/// for snapshot testing.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        for x in buf.area.left()..buf.area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line for cleaner snapshots
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// An [`EventSource`] that replays a fixed list of events.
///
/// Once the script is exhausted every poll times out, like an idle terminal.
#[derive(Debug, Default)]
pub(crate) struct ScriptedEvents {
    events: VecDeque<Event>,
    polls: usize,
}

impl ScriptedEvents {
    pub(crate) fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            polls: 0,
        }
    }

    /// Number of times the source was polled.
    pub(crate) fn polls(&self) -> usize {
        self.polls
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        self.polls += 1;
        Ok(self.events.pop_front())
    }
}

/// An [`EventSource`] whose every poll fails.
#[derive(Debug, Default)]
pub(crate) struct FailingEvents;

impl EventSource for FailingEvents {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        Err(io::Error::other("terminal went away"))
    }
}
