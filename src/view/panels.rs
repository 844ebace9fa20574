//! Results and error panels.

use super::styles::UiStyles;
use crate::model::RecommendationResult;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const RESULTS_TITLE: &str = "Recommended trainings";
const ERROR_TITLE: &str = "Error";

fn panel_block<'a>(title: &'a str, revealed: bool, styles: &UiStyles) -> Block<'a> {
    let border_style = if revealed {
        styles.revealed_border
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// One line naming the member, then one tag per formation in service order.
pub struct ResultsPanel<'a> {
    result: &'a RecommendationResult,
    revealed: bool,
    styles: &'a UiStyles,
}

impl<'a> ResultsPanel<'a> {
    /// `revealed` highlights the border of the panel last scrolled into view.
    pub fn new(result: &'a RecommendationResult, revealed: bool, styles: &'a UiStyles) -> Self {
        Self {
            result,
            revealed,
            styles,
        }
    }

    /// Tag spans separated by single spaces.
    fn tags(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.result.formations.len() * 2);
        for (index, formation) in self.result.formations.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {formation} "), self.styles.tag));
        }
        Line::from(spans)
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Line::from(vec![
            Span::raw("Member "),
            Span::styled(self.result.member_id.to_string(), self.styles.title),
        ]);
        Paragraph::new(vec![header, self.tags()])
            .wrap(Wrap { trim: false })
            .block(panel_block(RESULTS_TITLE, self.revealed, self.styles))
            .render(area, buf);
    }
}

/// The current error message, and nothing else.
pub struct ErrorPanel<'a> {
    message: &'a str,
    revealed: bool,
    styles: &'a UiStyles,
}

impl<'a> ErrorPanel<'a> {
    /// See [`ResultsPanel::new`] for `revealed`.
    pub fn new(message: &'a str, revealed: bool, styles: &'a UiStyles) -> Self {
        Self {
            message,
            revealed,
            styles,
        }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(self.message, self.styles.error))
            .wrap(Wrap { trim: true })
            .block(panel_block(ERROR_TITLE, self.revealed, self.styles))
            .render(area, buf);
    }
}
