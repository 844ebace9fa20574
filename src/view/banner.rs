//! Notification banners stacked in the top-right corner.

use super::constants::{BANNER_HEIGHT, BANNER_MAX_WIDTH, BANNER_PADDING};
use super::styles::UiStyles;
use crate::state::{BannerPhase, NotificationStack};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget},
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Rectangle of the `index`-th drawn banner inside `area`.
///
/// Returns `None` once the stack runs past the bottom of `area`.
pub fn banner_area(area: Rect, index: usize, message: &str) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?.checked_mul(BANNER_HEIGHT)?;
    if offset.saturating_add(BANNER_HEIGHT) > area.height {
        return None;
    }
    let text_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(BANNER_PADDING)
        .min(BANNER_MAX_WIDTH)
        .min(area.width);
    Some(Rect {
        x: area.right() - width,
        y: area.y + offset,
        width,
        height: BANNER_HEIGHT,
    })
}

/// Overlay of every banner drawn at `now`, oldest on top.
pub struct BannerStack<'a> {
    stack: &'a NotificationStack,
    now: Instant,
    styles: &'a UiStyles,
}

impl<'a> BannerStack<'a> {
    /// Draw `stack` as it looks at `now`.
    pub fn new(stack: &'a NotificationStack, now: Instant, styles: &'a UiStyles) -> Self {
        Self { stack, now, styles }
    }
}

impl Widget for BannerStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, (banner, phase)) in self.stack.drawn(self.now).enumerate() {
            let Some(rect) = banner_area(area, index, banner.message()) else {
                break;
            };
            let mut style = self.styles.banner(banner.kind());
            if phase == BannerPhase::FadingOut {
                style = style.add_modifier(Modifier::DIM);
            }
            Clear.render(rect, buf);
            Paragraph::new(Line::styled(banner.message(), style))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(style)
                        .padding(Padding::horizontal(1)),
                )
                .render(rect, buf);
        }
    }
}
