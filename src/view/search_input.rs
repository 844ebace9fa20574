//! Identifier input box and submit affordance.

use super::loading_indicator::LoadingIndicator;
use super::styles::UiStyles;
use crate::state::{IdentifierField, SubmitAffordance};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Title of the identifier input box.
const INPUT_TITLE: &str = "Member ID";

/// Identifier field with a block cursor.
pub struct SearchInput<'a> {
    field: &'a IdentifierField,
    styles: &'a UiStyles,
}

impl<'a> SearchInput<'a> {
    /// Render `field` with its cursor.
    pub fn new(field: &'a IdentifierField, styles: &'a UiStyles) -> Self {
        Self { field, styles }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.field.text();
        let cursor = self.field.cursor();

        // Split text into before/after cursor for rendering cursor
        let before: String = text.chars().take(cursor).collect();
        let mut after = text.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after_text: String = after.collect();

        let line = Line::from(vec![
            Span::styled(before, self.styles.field),
            Span::styled(cursor_char, self.styles.cursor),
            Span::styled(after_text, self.styles.field),
        ]);
        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title(INPUT_TITLE))
            .render(area, buf);
    }
}

/// The submit affordance: a label while idle, a spinner while busy.
pub struct SubmitButton<'a> {
    affordance: &'a SubmitAffordance,
    spinner: LoadingIndicator,
    styles: &'a UiStyles,
}

impl<'a> SubmitButton<'a> {
    /// Render `affordance`, using `spinner` for the busy glyph.
    pub fn new(
        affordance: &'a SubmitAffordance,
        spinner: LoadingIndicator,
        styles: &'a UiStyles,
    ) -> Self {
        Self {
            affordance,
            spinner,
            styles,
        }
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (content, style) = if self.affordance.is_busy() {
            (self.spinner.render(self.styles.button_busy), self.styles.button_busy)
        } else {
            (
                Span::styled(self.affordance.label().to_string(), self.styles.button),
                self.styles.button,
            )
        };

        Paragraph::new(Line::from(content))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(area, buf);
    }
}
