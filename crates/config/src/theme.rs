//! Box styles and the built-in theme.
//!
//! A [`BoxStyle`] describes everything about a box except its size: padding,
//! optional border, colors, and text alignment. The renderer supplies the
//! width and height at layout time. A [`Theme`] groups one style per screen
//! region and is built once at startup.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding},
};

/// The built-in color palette.
pub mod palette {
    use ratatui::style::Color;

    /// Container background.
    pub const PINK: Color = Color::Rgb(0x8b, 0x5a, 0x8b);
    /// Header background.
    pub const GREEN: Color = Color::Rgb(0x4a, 0x7c, 0x4a);
    /// Body background and border background.
    pub const BLUE: Color = Color::Rgb(0x4a, 0x5f, 0x8b);
    /// Footer background.
    pub const ORANGE: Color = Color::Rgb(0xb8, 0x86, 0x0b);
    /// Left pane background.
    pub const RED: Color = Color::Rgb(0xc9, 0x1b, 0x12);
    /// Right pane background.
    pub const PURPLE: Color = Color::Rgb(0x8f, 0x12, 0xc9);
    /// Foreground used on every colored box.
    pub const TEXT: Color = Color::Rgb(0xf0, 0xf0, 0xf0);
}

/// Size-independent style of a single box.
///
/// # Examples
///
/// ```
/// use ratatui::widgets::{BorderType, Padding};
/// use stickyfoot_config::BoxStyle;
///
/// let style = BoxStyle::new()
///     .padding(Padding::uniform(1))
///     .border(BorderType::Rounded);
///
/// // One column/row of padding plus one of border on each side.
/// assert_eq!(style.frame_size(), (4, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    /// Space between the border (or box edge) and the content.
    pub padding: Padding,
    /// Border drawn around the box, if any.
    pub border: Option<BorderType>,
    /// Text color.
    pub fg: Option<Color>,
    /// Fill color of the whole box.
    pub bg: Option<Color>,
    /// Background of the border cells.
    pub border_bg: Option<Color>,
    /// Whether text is bold.
    pub bold: bool,
    /// Horizontal alignment of each text line.
    pub alignment: Alignment,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxStyle {
    /// Creates an unstyled box: no padding, no border, left-aligned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            padding: Padding::ZERO,
            border: None,
            fg: None,
            bg: None,
            border_bg: None,
            bold: false,
            alignment: Alignment::Left,
        }
    }

    /// Sets the padding.
    #[must_use]
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Draws a border of the given kind on all four sides.
    #[must_use]
    pub const fn border(mut self, border: BorderType) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the text color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Sets the border background color.
    #[must_use]
    pub const fn border_bg(mut self, color: Color) -> Self {
        self.border_bg = Some(color);
        self
    }

    /// Renders text in bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the text alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns the `(width, height)` the box consumes beyond its content.
    ///
    /// This is the sum of padding and border on opposite sides.
    #[must_use]
    pub const fn frame_size(&self) -> (u16, u16) {
        let border = if self.border.is_some() { 2 } else { 0 };
        (
            self.padding.left + self.padding.right + border,
            self.padding.top + self.padding.bottom + border,
        )
    }

    /// Returns the style applied to the text and the box fill.
    #[must_use]
    pub fn text_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Builds the ratatui [`Block`] holding this box's padding and border.
    ///
    /// The block's inner area is the box area shrunk by [`frame_size`](Self::frame_size).
    #[must_use]
    pub fn block(&self) -> Block<'static> {
        let mut block = Block::new().padding(self.padding).style(self.text_style());
        if let Some(border_type) = self.border {
            let mut border_style = Style::default();
            if let Some(bg) = self.border_bg {
                border_style = border_style.bg(bg);
            }
            block = block
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style);
        }
        block
    }
}

/// One [`BoxStyle`] per screen region.
///
/// `Theme::default()` is the built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Outer container wrapping the whole screen.
    pub container: BoxStyle,
    /// Header bar.
    pub header: BoxStyle,
    /// Body box (holds the single body text or both panes).
    pub body: BoxStyle,
    /// Left pane of a split body.
    pub left_pane: BoxStyle,
    /// Right pane of a split body.
    pub right_pane: BoxStyle,
    /// Footer bar.
    pub footer: BoxStyle,
}

impl Default for Theme {
    fn default() -> Self {
        use palette::{BLUE, GREEN, ORANGE, PINK, PURPLE, RED, TEXT};

        Self {
            container: BoxStyle::new().padding(Padding::uniform(1)).bg(PINK),
            header: BoxStyle::new()
                .bold()
                .bg(GREEN)
                .fg(TEXT)
                .alignment(Alignment::Center),
            body: BoxStyle::new()
                .border(BorderType::Rounded)
                .border_bg(BLUE)
                .fg(TEXT)
                .bg(BLUE),
            left_pane: BoxStyle::new().bg(RED).fg(TEXT).alignment(Alignment::Left),
            right_pane: BoxStyle::new()
                .bg(PURPLE)
                .fg(TEXT)
                .alignment(Alignment::Right),
            footer: BoxStyle::new()
                .bg(ORANGE)
                .fg(TEXT)
                .alignment(Alignment::Center),
        }
    }
}

impl Theme {
    /// Returns a theme with no padding, borders, or colors.
    ///
    /// Useful when only the box-model arithmetic matters.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            container: BoxStyle::new(),
            header: BoxStyle::new(),
            body: BoxStyle::new(),
            left_pane: BoxStyle::new(),
            right_pane: BoxStyle::new(),
            footer: BoxStyle::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;

    #[test]
    fn unstyled_box_has_no_frame() {
        assert_eq!(BoxStyle::new().frame_size(), (0, 0));
    }

    #[test]
    fn frame_size_counts_asymmetric_padding() {
        let style = BoxStyle::new().padding(Padding::new(1, 2, 3, 4));
        assert_eq!(style.frame_size(), (3, 7));
    }

    #[test]
    fn default_theme_frames() {
        let theme = Theme::default();
        assert_eq!(theme.container.frame_size(), (2, 2));
        assert_eq!(theme.body.frame_size(), (2, 2));
        assert_eq!(theme.header.frame_size(), (0, 0));
        assert_eq!(theme.footer.frame_size(), (0, 0));
    }

    #[test]
    fn block_inner_matches_frame_size() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        for style in [theme.container, theme.body, theme.header] {
            let inner = style.block().inner(area);
            let (fw, fh) = style.frame_size();
            assert_eq!(inner.width, area.width - fw);
            assert_eq!(inner.height, area.height - fh);
        }
    }

    #[test]
    fn text_style_carries_colors_and_bold() {
        let style = Theme::default().header.text_style();
        assert_eq!(style.bg, Some(palette::GREEN));
        assert_eq!(style.fg, Some(palette::TEXT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
