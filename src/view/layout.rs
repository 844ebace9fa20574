//! Screen layout.
//!
//! Pure layout logic: computes the areas of every element from the current
//! [`UiState`] and renders the widgets into them.

use super::banner::BannerStack;
use super::constants::{
    ERROR_PANEL_HEIGHT, EXAMPLES_BAR_HEIGHT, INPUT_BOX_HEIGHT, RESULTS_PANEL_MIN_HEIGHT,
    STATUS_BAR_HEIGHT, SUBMIT_BUTTON_WIDTH, TITLE_BAR_HEIGHT,
};
use super::loading_indicator::LoadingIndicator;
use super::panels::{ErrorPanel, ResultsPanel};
use super::search_input::{SearchInput, SubmitButton};
use super::styles::UiStyles;
use crate::config::MAX_EXAMPLE_SHORTCUTS;
use crate::model::MemberId;
use crate::state::{Panel, UiState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

const TITLE: &str = "SkillForge · training recommendations";
const KEY_HINTS: &str = "Enter search · F1-F9 examples · Esc clear · Ctrl+Q quit";

/// Everything the layout needs besides the UI state itself.
pub struct ViewContext<'a> {
    /// Preset members bound to F1..F9.
    pub examples: &'a [MemberId],
    /// Resolved palette.
    pub styles: &'a UiStyles,
    /// Current spinner frame.
    pub spinner: LoadingIndicator,
    /// Render time, used for banner phases.
    pub now: Instant,
}

/// Areas of the fixed elements plus whichever panels are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar.
    pub title: Rect,
    /// Identifier field.
    pub input: Rect,
    /// Submit affordance, right of the field.
    pub button: Rect,
    /// Example shortcuts line.
    pub examples: Rect,
    /// Results panel, when visible.
    pub results: Option<Rect>,
    /// Error panel, when visible.
    pub error: Option<Rect>,
    /// Key hints at the bottom.
    pub status: Rect,
}

/// Split `area` for the given panel visibility.
///
/// The results panel takes the remaining height; the error panel has a fixed
/// height under it. Hidden panels get no area.
pub fn calculate_areas(area: Rect, results_visible: bool, error_visible: bool) -> ScreenAreas {
    let [title, input_row, examples, content, status] = Layout::vertical([
        Constraint::Length(TITLE_BAR_HEIGHT),
        Constraint::Length(INPUT_BOX_HEIGHT),
        Constraint::Length(EXAMPLES_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    let [input, button] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(SUBMIT_BUTTON_WIDTH)])
            .areas(input_row);

    let (results, error) = match (results_visible, error_visible) {
        (true, true) => {
            let [results, error] = Layout::vertical([
                Constraint::Min(RESULTS_PANEL_MIN_HEIGHT),
                Constraint::Length(ERROR_PANEL_HEIGHT),
            ])
            .areas(content);
            (Some(results), Some(error))
        }
        (true, false) => (Some(content), None),
        (false, true) => {
            let [error, _] =
                Layout::vertical([Constraint::Length(ERROR_PANEL_HEIGHT), Constraint::Min(0)])
                    .areas(content);
            (None, Some(error))
        }
        (false, false) => (None, None),
    };

    ScreenAreas {
        title,
        input,
        button,
        examples,
        results,
        error,
        status,
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &UiState, ctx: &ViewContext<'_>) {
    let visibility = state.visibility();
    let areas = calculate_areas(
        frame.area(),
        visibility.results_visible,
        visibility.error_visible,
    );
    let styles = ctx.styles;

    frame.render_widget(
        Paragraph::new(Line::styled(TITLE, styles.title)),
        areas.title,
    );
    frame.render_widget(SearchInput::new(&state.field, styles), areas.input);
    frame.render_widget(
        SubmitButton::new(state.affordance(), ctx.spinner, styles),
        areas.button,
    );
    frame.render_widget(
        Paragraph::new(examples_line(ctx.examples, styles)),
        areas.examples,
    );

    if let (Some(area), Some(result)) = (areas.results, state.results()) {
        let revealed = state.revealed() == Some(Panel::Results);
        frame.render_widget(ResultsPanel::new(result, revealed, styles), area);
    }
    if let Some(area) = areas.error {
        let revealed = state.revealed() == Some(Panel::Error);
        frame.render_widget(
            ErrorPanel::new(state.error_message(), revealed, styles),
            area,
        );
    }

    let status = if visibility.busy {
        Line::from(ctx.spinner.render(styles.hint))
    } else {
        Line::styled(KEY_HINTS, styles.hint)
    };
    frame.render_widget(Paragraph::new(status), areas.status);

    frame.render_widget(
        BannerStack::new(state.notifications(), ctx.now, styles),
        frame.area(),
    );
}

/// `Examples: [F1] 1  [F2] 2 ...`, one entry per preset shortcut.
fn examples_line<'a>(examples: &[MemberId], styles: &UiStyles) -> Line<'a> {
    let mut spans = vec![Span::styled("Examples:", styles.hint)];
    for (index, id) in examples.iter().take(MAX_EXAMPLE_SHORTCUTS).enumerate() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("[F{}]", index + 1), styles.hint));
        spans.push(Span::raw(format!(" {id}")));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
