//! Spinner shown while a search is in flight.
//!
//! The frame counter is advanced by the render tick; the widget itself is
//! pure and renders whatever frame it is given.

use crate::state::LOADING_LABEL;
use ratatui::{style::Style, text::Span};

/// Braille spinner frames, one per render tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner shown on the submit affordance while busy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    frame: usize,
}

impl LoadingIndicator {
    /// Start at the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next frame, wrapping around.
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    /// Current frame.
    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Render as `"<glyph> Searching..."`.
    pub fn render(&self, style: Style) -> Span<'static> {
        Span::styled(format!("{} {LOADING_LABEL}", self.glyph()), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_frame() {
        assert_eq!(LoadingIndicator::new().glyph(), "⠋");
    }

    #[test]
    fn advance_wraps_after_last_frame() {
        let mut indicator = LoadingIndicator::new();
        for _ in 0..SPINNER_FRAMES.len() - 1 {
            indicator.advance();
        }
        assert_eq!(indicator.glyph(), "⠏");
        indicator.advance();
        assert_eq!(indicator, LoadingIndicator::new());
    }

    #[test]
    fn render_includes_loading_label() {
        let mut indicator = LoadingIndicator::new();
        indicator.advance();
        let span = indicator.render(Style::default());
        assert_eq!(span.content, "⠙ Searching...");
    }
}
