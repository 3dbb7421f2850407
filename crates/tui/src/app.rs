//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use ratatui::Frame;
use stickyfoot_config::Theme;
use stickyfoot_protocol::{Message, ScreenContent, ScreenModel};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    event::{EventSource, event_to_message},
    terminal::AppTerminal,
    widgets::render_screen,
};

/// The main application struct.
///
/// Owns the screen model and the theme, and provides the main event loop.
#[derive(Debug)]
pub struct App {
    model: ScreenModel,
    theme: Theme,
    /// Messages raised outside the terminal, such as an interrupt signal.
    interrupts: Option<UnboundedReceiver<Message>>,
}

impl App {
    /// Creates a new application showing `content` styled by `theme`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stickyfoot_config::Theme;
    /// use stickyfoot_protocol::demo::demo_content;
    /// use stickyfoot_tui::App;
    ///
    /// let app = App::new(demo_content(), Theme::default());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(content: ScreenContent, theme: Theme) -> Self {
        Self {
            model: ScreenModel::new(content),
            theme,
            interrupts: None,
        }
    }

    /// Attaches a channel of messages generated outside the terminal.
    ///
    /// Pending messages are applied before each terminal poll.
    ///
    /// # Examples
    ///
    /// ```
    /// use stickyfoot_config::Theme;
    /// use stickyfoot_protocol::{Message, demo::demo_content};
    /// use stickyfoot_tui::App;
    ///
    /// let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Message>();
    /// let app = App::new(demo_content(), Theme::default()).with_interrupts(rx);
    /// # drop(tx);
    /// ```
    #[must_use]
    pub fn with_interrupts(mut self, interrupts: UnboundedReceiver<Message>) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    /// Returns a reference to the screen model.
    #[must_use]
    pub fn model(&self) -> &ScreenModel {
        &self.model
    }

    /// Returns a reference to the theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns whether the application asked to exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.model.is_terminated()
    }

    /// Updates the application state based on a message.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
            }
            Message::Quit => {
                tracing::info!("quit requested");
            }
        }
        self.model.apply(msg);
    }

    /// Renders the application UI to the given frame.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        render_screen(&self.model, &self.theme, area, frame.buffer_mut());
    }

    /// Processes one step of input.
    ///
    /// Applies every pending interrupt message, then, unless the application
    /// is quitting, polls `events` once and applies the resulting message.
    ///
    /// # Errors
    ///
    /// Returns an error if polling the event source fails.
    pub fn pump<E: EventSource>(&mut self, events: &mut E) -> std::io::Result<()> {
        while let Some(msg) = self
            .interrupts
            .as_mut()
            .and_then(|interrupts| interrupts.try_recv().ok())
        {
            self.update(msg);
        }

        if self.should_quit() {
            return Ok(());
        }

        if let Some(event) = events.poll_event()? {
            if let Some(msg) = event_to_message(&event) {
                self.update(msg);
            }
        }
        Ok(())
    }

    /// Runs the main application loop.
    ///
    /// Seeds the model with the terminal's current size (the terminal sends
    /// no resize event at startup), then renders and pumps events until a
    /// quit message arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use stickyfoot_config::Theme;
    /// use stickyfoot_protocol::demo::demo_content;
    /// use stickyfoot_tui::{App, event::CrosstermEvents, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(demo_content(), Theme::default());
    ///     app.run(&mut terminal, &mut CrosstermEvents::default()).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run<E: EventSource>(
        &mut self,
        terminal: &mut AppTerminal,
        events: &mut E,
    ) -> anyhow::Result<()> {
        let size = terminal.size()?;
        self.update(Message::Resize {
            width: size.width,
            height: size.height,
        });

        while !self.should_quit() {
            terminal.draw(|frame| self.view(frame))?;
            self.pump(events)?;
            // Let the interrupt listener run between polls
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use stickyfoot_protocol::{Phase, demo::demo_content};

    use super::*;
    use crate::test_utils::{FailingEvents, ScriptedEvents, buffer_to_string};
    use crate::widgets::LOADING_PLACEHOLDER;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn app_new_starts_uninitialized() {
        let app = App::new(demo_content(), Theme::default());

        assert!(!app.should_quit());
        assert_eq!(app.model().phase(), Phase::Uninitialized);
        assert_eq!(app.theme(), &Theme::default());
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = App::new(demo_content(), Theme::default());

        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_resize_updates_model() {
        let mut app = App::new(demo_content(), Theme::default());

        app.update(Message::Resize {
            width: 100,
            height: 30,
        });
        assert_eq!(app.model().size(), Some((100, 30)));
    }

    #[test]
    fn app_view_shows_placeholder_before_first_resize() {
        let app = App::new(demo_content(), Theme::default());

        let content = draw(&app, 40, 10);
        assert!(content.starts_with(LOADING_PLACEHOLDER));
    }

    #[test]
    fn app_view_renders_layout_once_sized() {
        let mut app = App::new(demo_content(), Theme::default());
        app.update(Message::Resize {
            width: 80,
            height: 24,
        });

        let content = draw(&app, 80, 24);
        assert!(content.contains("Header Title"));
        assert!(content.contains("[Left Pane]"));
        assert!(content.contains("[Right Pane]"));
        assert!(content.contains("Footer — press q to quit"));
        assert!(!content.contains(LOADING_PLACEHOLDER));
    }

    #[test]
    fn app_view_shows_too_small_message() {
        let mut app = App::new(demo_content(), Theme::default());
        app.update(Message::Resize {
            width: 40,
            height: 5,
        });

        let content = draw(&app, 40, 5);
        assert!(
            content.contains("Terminal too small"),
            "Buffer should contain 'Terminal too small' message"
        );
    }

    #[test]
    fn pump_applies_resize_then_quit() {
        let mut app = App::new(demo_content(), Theme::default());
        let mut events = ScriptedEvents::new([Event::Resize(90, 30), key(KeyCode::Char('q'))]);

        app.pump(&mut events).unwrap();
        assert_eq!(app.model().size(), Some((90, 30)));

        app.pump(&mut events).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn pump_ignores_unbound_keys() {
        let mut app = App::new(demo_content(), Theme::default());
        app.update(Message::Resize {
            width: 80,
            height: 24,
        });
        let mut events = ScriptedEvents::new([key(KeyCode::Char('x')), key(KeyCode::Enter)]);

        app.pump(&mut events).unwrap();
        app.pump(&mut events).unwrap();

        assert_eq!(
            app.model().phase(),
            Phase::Sized {
                width: 80,
                height: 24
            }
        );
    }

    #[test]
    fn pump_tolerates_idle_polls() {
        let mut app = App::new(demo_content(), Theme::default());
        let mut events = ScriptedEvents::default();

        app.pump(&mut events).unwrap();
        assert_eq!(events.polls(), 1);
        assert!(!app.should_quit());
    }

    #[test]
    fn pump_applies_interrupts_before_polling() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let mut app = App::new(demo_content(), Theme::default()).with_interrupts(rx);
        let mut events = ScriptedEvents::new([Event::Resize(80, 24)]);

        tx.send(Message::Quit).unwrap();
        app.pump(&mut events).unwrap();

        assert!(app.should_quit());
        assert_eq!(events.polls(), 0, "quitting skips the terminal poll");
    }

    #[test]
    fn pump_survives_closed_interrupt_channel() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Message>();
        drop(tx);
        let mut app = App::new(demo_content(), Theme::default()).with_interrupts(rx);
        let mut events = ScriptedEvents::new([Event::Resize(80, 24)]);

        app.pump(&mut events).unwrap();
        assert_eq!(app.model().size(), Some((80, 24)));
    }

    #[test]
    fn pump_propagates_poll_errors() {
        let mut app = App::new(demo_content(), Theme::default());

        assert!(app.pump(&mut FailingEvents).is_err());
    }
}
