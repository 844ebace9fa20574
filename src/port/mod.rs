//! Rendering port between the controllers and whatever displays their
//! outcomes.
//!
//! The controllers never touch display state directly. They call this
//! capability set, which the TUI implements over its shared UI state and tests
//! implement with [`recording::RecordingPort`].

pub mod recording;

pub use recording::{RecordingPort, RenderEvent};

use crate::model::{NotificationKind, RecommendationResult};

/// Display capabilities the controllers drive.
///
/// Implementations must be cheap and non-blocking: controllers call them
/// between awaits of an in-flight request.
pub trait RenderPort: Send + Sync {
    /// Fill the results panel, show it and scroll it into view.
    fn show_result(&self, result: &RecommendationResult);

    /// Make `message` the sole content of the error panel, show it and
    /// scroll it into view.
    fn show_error(&self, message: &str);

    /// Hide the results panel. Idempotent.
    fn hide_results(&self);

    /// Hide the error panel. Idempotent.
    fn hide_error(&self);

    /// Enter (`true`) or leave (`false`) the busy state of the submit
    /// affordance.
    fn set_busy(&self, busy: bool);

    /// Push a transient notification banner.
    fn notify(&self, kind: NotificationKind, message: &str);
}
