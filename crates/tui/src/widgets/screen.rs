//! Whole-screen rendering.
//!
//! [`render_screen`] is a pure function of the screen model and the theme:
//! rendering the same model twice produces the same buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget, Wrap},
};
use stickyfoot_config::Theme;
use stickyfoot_protocol::{Body, ScreenContent, ScreenModel};

use super::boxed::{render_box, render_frame};
use crate::layout::ScreenLayout;

/// Text shown until the terminal size is known.
pub const LOADING_PLACEHOLDER: &str = "loading…";

/// Renders the screen for `model` into `buf`.
///
/// - Before the first size is known, only [`LOADING_PLACEHOLDER`] is drawn.
/// - When the size is known, the box layout is drawn in the top-left
///   `width × height` cells of `area`.
/// - When that size is too small for the layout, a "terminal too small"
///   message is drawn instead.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use stickyfoot_config::Theme;
/// use stickyfoot_protocol::{Message, ScreenModel, demo::demo_content};
/// use stickyfoot_tui::widgets::render_screen;
///
/// let mut model = ScreenModel::new(demo_content());
/// model.apply(Message::Resize { width: 80, height: 24 });
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_screen(&model, &Theme::default(), area, &mut buf);
/// ```
pub fn render_screen(model: &ScreenModel, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let Some((width, height)) = model.size() else {
        render_loading(area, buf);
        return;
    };

    let screen = Rect::new(area.x, area.y, width, height).intersection(area);
    match ScreenLayout::compute(screen, theme, model.content()) {
        Some(layout) => render_layout(&layout, theme, model.content(), buf),
        None => render_terminal_too_small(screen, buf),
    }
}

/// Draws every box of a computed layout.
fn render_layout(layout: &ScreenLayout, theme: &Theme, content: &ScreenContent, buf: &mut Buffer) {
    render_frame(&theme.container, layout.container, buf);
    render_box(&theme.header, &content.header, layout.header, buf);

    match (&content.body, layout.panes) {
        (Body::Split { left, right }, Some((left_area, right_area))) => {
            render_frame(&theme.body, layout.body, buf);
            render_box(&theme.left_pane, left, left_area, buf);
            render_box(&theme.right_pane, right, right_area, buf);
        }
        (Body::Single(text), _) => {
            render_box(&theme.body, text, layout.body, buf);
        }
        (Body::Split { .. }, None) => {
            render_frame(&theme.body, layout.body, buf);
        }
    }

    render_box(&theme.footer, &content.footer, layout.footer, buf);
}

/// Draws the placeholder shown before the first size event.
fn render_loading(area: Rect, buf: &mut Buffer) {
    Paragraph::new(LOADING_PLACEHOLDER).render(area, buf);
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(area: Rect, buf: &mut Buffer) {
    let message = format!("Terminal too small ({}×{})", area.width, area.height);

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    // Center the message vertically
    let vertical_offset = area.height.saturating_sub(1) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    paragraph.render(centered_area, buf);
}
