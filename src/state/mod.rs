//! UI state machine (pure).
//!
//! All state transitions are plain functions and methods testable without
//! a terminal.

pub mod busy;
pub mod identifier_field;
pub mod input_handler;
pub mod notification;
pub mod ui_state;

// Re-export for convenience
pub use busy::{SubmitAffordance, LOADING_LABEL, SUBMIT_LABEL};
pub use identifier_field::IdentifierField;
pub use notification::{Banner, BannerPhase, BannerTimings, NotificationStack};
pub use ui_state::{Panel, SharedUi, UiState, UiVisibilityState};
