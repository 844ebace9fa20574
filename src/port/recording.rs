//! Render port that records every call, for tests and headless use.

use super::RenderPort;
use crate::model::{NotificationKind, RecommendationResult};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// One call made on a [`RecordingPort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// `show_result` with the rendered result.
    ShowResult(RecommendationResult),
    /// `show_error` with the message.
    ShowError(String),
    /// `hide_results`
    HideResults,
    /// `hide_error`
    HideError,
    /// `set_busy` with the requested state.
    SetBusy(bool),
    /// `notify` with severity and banner text.
    Notify(NotificationKind, String),
}

impl fmt::Display for RenderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowResult(result) => write!(
                f,
                "show_result {} [{}]",
                result.member_id,
                result.formations.join(" | ")
            ),
            Self::ShowError(message) => write!(f, "show_error {message}"),
            Self::HideResults => f.write_str("hide_results"),
            Self::HideError => f.write_str("hide_error"),
            Self::SetBusy(busy) => write!(f, "set_busy {busy}"),
            Self::Notify(kind, message) => write!(f, "notify {kind:?} {message}"),
        }
    }
}

/// Port that records every call in order instead of drawing.
///
/// Used to assert the exact call sequence of a controller.
#[derive(Debug, Default)]
pub struct RecordingPort {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingPort {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all calls so far, in order.
    pub fn events(&self) -> Vec<RenderEvent> {
        self.lock().clone()
    }

    /// One line per call, in order.
    pub fn transcript(&self) -> String {
        self.lock()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(&self, event: RenderEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RenderEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderPort for RecordingPort {
    fn show_result(&self, result: &RecommendationResult) {
        self.record(RenderEvent::ShowResult(result.clone()));
    }

    fn show_error(&self, message: &str) {
        self.record(RenderEvent::ShowError(message.to_string()));
    }

    fn hide_results(&self) {
        self.record(RenderEvent::HideResults);
    }

    fn hide_error(&self) {
        self.record(RenderEvent::HideError);
    }

    fn set_busy(&self, busy: bool) {
        self.record(RenderEvent::SetBusy(busy));
    }

    fn notify(&self, kind: NotificationKind, message: &str) {
        self.record(RenderEvent::Notify(kind, message.to_string()));
    }
}
