//! Box-model layout arithmetic for the screen.
//!
//! Every box on screen is sized the same way: its rendered size is its
//! content size plus its frame size (padding and border), so the space left
//! for content is found by subtracting frame sizes from the space a box is
//! given. [`ScreenLayout::compute`] applies that rule from the terminal edge
//! inwards:
//!
//! ```text
//! +-------------------------- container (padding) ---------------------------+
//! | header                (full inner width, wrapped line count high)        |
//! | +-------------------------- body (border) -----------------------------+ |
//! | | left pane                          | right pane                      | |
//! | |   height = max height = available  |   height = max height = avail.  | |
//! | +----------------------------------------------------------------------+ |
//! | footer                (full inner width, wrapped line count high)        |
//! +--------------------------------------------------------------------------+
//! ```

use ratatui::{
    layout::Rect,
    widgets::{Paragraph, Wrap},
};
use stickyfoot_config::{BoxStyle, Theme};
use stickyfoot_protocol::{Body, ScreenContent};

/// Resolves the rendered height of a box from its content height.
///
/// `height` is a minimum: shorter content is padded up to it. `max_height`
/// is a maximum: taller content is truncated to it. Setting both to the same
/// value pins the box to exactly that height whatever its content, which is
/// what keeps the footer on the last row.
///
/// # Examples
///
/// ```
/// use stickyfoot_tui::layout::resolve_height;
///
/// // Short content grows to fill the space.
/// assert_eq!(resolve_height(2, Some(5), Some(5)), 5);
/// // Long content is clamped instead of pushing the footer away.
/// assert_eq!(resolve_height(9, Some(5), Some(5)), 5);
/// ```
#[must_use]
pub fn resolve_height(content: u16, height: Option<u16>, max_height: Option<u16>) -> u16 {
    let grown = height.map_or(content, |min| content.max(min));
    max_height.map_or(grown, |max| grown.min(max))
}

/// Returns the height `text` takes when rendered in `style` at `width`
/// columns: wrapped line count plus the style's frame height.
#[must_use]
pub fn measure_height(style: &BoxStyle, text: &str, width: u16) -> u16 {
    let (frame_w, frame_h) = style.frame_size();
    let lines = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width.saturating_sub(frame_w));
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(frame_h)
}

/// Rectangles of every box on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The outer container. Full terminal width, at most the terminal height.
    pub container: Rect,
    /// The header bar.
    pub header: Rect,
    /// The body box, including its frame.
    pub body: Rect,
    /// Content area of the body, inside its frame.
    pub body_content: Rect,
    /// Left and right panes, when the body is split.
    pub panes: Option<(Rect, Rect)>,
    /// The footer bar.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Computes the layout of `content` in `area`.
    ///
    /// Returns `None` when `area` is too small for the box model: a frame
    /// does not fit, header and footer leave no row for the body, or a pane
    /// would have no column.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use stickyfoot_config::Theme;
    /// use stickyfoot_protocol::demo::demo_content;
    /// use stickyfoot_tui::layout::ScreenLayout;
    ///
    /// let area = Rect::new(0, 0, 80, 24);
    /// let layout = ScreenLayout::compute(area, &Theme::default(), &demo_content()).unwrap();
    ///
    /// // The footer sits on the last row inside the container padding.
    /// assert_eq!(layout.footer.bottom(), area.bottom() - 1);
    /// ```
    #[must_use]
    pub fn compute(area: Rect, theme: &Theme, content: &ScreenContent) -> Option<Self> {
        let (container_w, container_h) = theme.container.frame_size();
        let inner_w = area.width.checked_sub(container_w)?;
        let inner_h = area.height.checked_sub(container_h)?;
        if inner_w <= theme.header.frame_size().0 || inner_w <= theme.footer.frame_size().0 {
            return None;
        }

        let header_h = measure_height(&theme.header, &content.header, inner_w);
        let footer_h = measure_height(&theme.footer, &content.footer, inner_w);

        let (body_frame_w, body_frame_h) = theme.body.frame_size();
        let inner_body_w = inner_w.checked_sub(body_frame_w)?;
        let inner_body_h = inner_h.checked_sub(body_frame_h)?;

        let used = header_h.saturating_add(footer_h);
        let available = inner_body_h.checked_sub(used).filter(|&h| h > 0)?;

        let inner = theme.container.block().inner(area);
        let header = Rect::new(inner.x, inner.y, inner_w, header_h);

        let (body_content_w, pane_w) = match &content.body {
            Body::Single(_) if inner_body_w > 0 => (inner_body_w, None),
            Body::Split { .. } => {
                let pane_w = inner_body_w / 2;
                let min_w = theme
                    .left_pane
                    .frame_size()
                    .0
                    .max(theme.right_pane.frame_size().0);
                if pane_w <= min_w {
                    return None;
                }
                (pane_w * 2, Some(pane_w))
            }
            Body::Single(_) => return None,
        };

        // The body hugs its content, which is narrower than the header when
        // an odd width is split in two.
        let body = Rect::new(
            inner.x,
            header.bottom(),
            body_content_w + body_frame_w,
            available + body_frame_h,
        );
        let body_inner = theme.body.block().inner(body);
        let body_content = Rect::new(body_inner.x, body_inner.y, body_content_w, available);

        let panes = match (&content.body, pane_w) {
            (Body::Split { left, right }, Some(pane_w)) => {
                let left_h = resolve_height(
                    measure_height(&theme.left_pane, left, pane_w),
                    Some(available),
                    Some(available),
                );
                let right_h = resolve_height(
                    measure_height(&theme.right_pane, right, pane_w),
                    Some(available),
                    Some(available),
                );
                let left = Rect::new(body_content.x, body_content.y, pane_w, left_h);
                let right = Rect::new(left.right(), body_content.y, pane_w, right_h);
                Some((left, right))
            }
            _ => None,
        };

        let footer = Rect::new(inner.x, body.bottom(), inner_w, footer_h);

        let stacked = header_h
            .saturating_add(body.height)
            .saturating_add(footer_h)
            .saturating_add(container_h);
        let container = Rect::new(
            area.x,
            area.y,
            area.width,
            resolve_height(stacked, None, Some(area.height)),
        );

        Some(Self {
            container,
            header,
            body,
            body_content,
            panes,
            footer,
        })
    }
}
