//! Colour configuration and the style palette of the client.

use crate::model::NotificationKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit configuration, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== UiStyles =====

/// Styles for every element the client draws.
///
/// With colours disabled only modifiers remain (bold, dim, reversed) so the
/// layout stays readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStyles {
    /// Title bar.
    pub title: Style,
    /// Identifier text.
    pub field: Style,
    /// Block cursor in the identifier field.
    pub cursor: Style,
    /// Submit affordance while idle.
    pub button: Style,
    /// Submit affordance while busy.
    pub button_busy: Style,
    /// One formation tag.
    pub tag: Style,
    /// Error panel text.
    pub error: Style,
    /// Border of the panel last scrolled into view.
    pub revealed_border: Style,
    /// Key hints and example shortcuts.
    pub hint: Style,
    success: Style,
    warning: Style,
    failure: Style,
}

impl UiStyles {
    /// Build the palette, or a modifier-only one when colours are off.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                field: Style::default(),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                button: Style::default().fg(Color::Black).bg(Color::Cyan),
                button_busy: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                tag: Style::default().fg(Color::Black).bg(Color::LightBlue),
                error: Style::default().fg(Color::Red),
                revealed_border: Style::default().fg(Color::Yellow),
                hint: Style::default().fg(Color::DarkGray),
                success: Style::default().fg(Color::Green),
                warning: Style::default().fg(Color::Yellow),
                failure: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                field: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                button: Style::default().add_modifier(Modifier::REVERSED),
                button_busy: Style::default().add_modifier(Modifier::DIM),
                tag: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default(),
                revealed_border: Style::default().add_modifier(Modifier::BOLD),
                hint: Style::default(),
                success: Style::default(),
                warning: Style::default(),
                failure: Style::default(),
            }
        }
    }

    /// Border and text style of a banner of the given severity.
    pub fn banner(&self, kind: NotificationKind) -> Style {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Warning => self.warning,
            NotificationKind::Error => self.failure,
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
