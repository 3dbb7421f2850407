//! Styled text box rendering.
//!
//! A box fills its whole area with its style (so a box taller than its text
//! shows as a solid block) and clips text that does not fit (so a box never
//! draws past its area).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget, Wrap},
};
use stickyfoot_config::BoxStyle;

/// Renders `text` inside a box styled by `style`, filling `area`.
///
/// Text is wrapped at word boundaries to the content width and aligned per
/// the style. Lines past the bottom of the area are dropped.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use stickyfoot_config::Theme;
/// use stickyfoot_tui::widgets::render_box;
///
/// let area = Rect::new(0, 0, 20, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_box(&Theme::default().header, "Title", area, &mut buf);
/// ```
pub fn render_box(style: &BoxStyle, text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(text)
        .style(style.text_style())
        .alignment(style.alignment)
        .wrap(Wrap { trim: false })
        .block(style.block())
        .render(area, buf);
}

/// Renders only the frame and fill of a box, without text.
pub fn render_frame(style: &BoxStyle, area: Rect, buf: &mut Buffer) {
    style.block().render(area, buf);
}
