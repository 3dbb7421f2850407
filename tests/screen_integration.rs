//! Integration tests driving the app end to end against a test backend.

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use stickyfoot_config::{Config, Theme};
use stickyfoot_protocol::{
    Message, Phase,
    demo::{FOOTER_TEXT, HEADER_TEXT, demo_content, demo_single_content},
};
use stickyfoot_tui::{App, event::EventSource};

/// Replays a fixed list of events, then idles.
struct Replay(VecDeque<Event>);

impl Replay {
    fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self(events.into_iter().collect())
    }
}

impl EventSource for Replay {
    fn poll_event(&mut self) -> std::io::Result<Option<Event>> {
        Ok(self.0.pop_front())
    }
}

fn rows(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

fn draw(app: &App, terminal: &mut Terminal<TestBackend>) -> Vec<String> {
    terminal.draw(|frame| app.view(frame)).unwrap();
    rows(terminal.backend().buffer())
}

#[test]
fn footer_follows_terminal_resizes() {
    let config = Config::default();
    config.validate().unwrap();
    let mut app = App::new(demo_content(), config.theme);
    let mut events = Replay::new([Event::Resize(80, 24), Event::Resize(80, 12)]);

    app.pump(&mut events).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let tall = draw(&app, &mut terminal);
    assert_eq!(tall[1].trim(), HEADER_TEXT);
    assert_eq!(tall[22].trim(), FOOTER_TEXT);

    app.pump(&mut events).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    let short = draw(&app, &mut terminal);
    assert_eq!(short[1].trim(), HEADER_TEXT);
    assert_eq!(short[10].trim(), FOOTER_TEXT);
}

#[test]
fn long_body_never_pushes_footer_off_screen() {
    let mut app = App::new(demo_single_content(), Theme::default());
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

    app.update(Message::Resize {
        width: 40,
        height: 10,
    });
    let rows = draw(&app, &mut terminal);

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[8].trim(), FOOTER_TEXT);
}

#[test]
fn quit_key_ends_the_session() {
    let mut app = App::new(demo_content(), Theme::default());
    let mut events = Replay::new([
        Event::Resize(80, 24),
        Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        Event::Resize(100, 40),
    ]);

    for _ in 0..4 {
        app.pump(&mut events).unwrap();
    }

    assert!(app.should_quit());
    assert_eq!(app.model().phase(), Phase::Terminated);
}

#[tokio::test]
async fn interrupt_from_another_task_quits() {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(demo_content(), Theme::default()).with_interrupts(rx);
    let mut events = Replay::new([Event::Resize(80, 24)]);

    app.pump(&mut events).unwrap();
    assert!(!app.should_quit());

    tokio::spawn(async move {
        tx.send(Message::Quit).unwrap();
    })
    .await
    .unwrap();

    app.pump(&mut events).unwrap();
    assert!(app.should_quit());
}
