//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the identifier input box in lines (border + text).
pub const INPUT_BOX_HEIGHT: u16 = 3;

/// Width of the submit affordance next to the input box.
///
/// Wide enough for the spinner glyph plus the loading label.
pub const SUBMIT_BUTTON_WIDTH: u16 = 18;

/// Height of the example shortcut bar in lines.
pub const EXAMPLES_BAR_HEIGHT: u16 = 1;

/// Height of the status line at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum height of the results panel when visible.
pub const RESULTS_PANEL_MIN_HEIGHT: u16 = 4;

/// Height of the error panel when visible.
pub const ERROR_PANEL_HEIGHT: u16 = 4;

/// Height of one notification banner (border + message).
pub const BANNER_HEIGHT: u16 = 3;

/// Horizontal padding added around banner text, borders included.
pub const BANNER_PADDING: u16 = 4;

/// Widest a banner may grow before its text is clipped.
pub const BANNER_MAX_WIDTH: u16 = 48;

/// Render tick driving banner lifecycle and the spinner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
