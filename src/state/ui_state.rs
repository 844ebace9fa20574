//! Display state of the client and its rendering-port implementation.

use super::busy::SubmitAffordance;
use super::identifier_field::IdentifierField;
use super::notification::{BannerTimings, NotificationStack};
use crate::model::{NotificationKind, RecommendationResult};
use crate::port::RenderPort;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Panel most recently scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Results panel.
    Results,
    /// Error panel.
    Error,
}

/// Panel visibility and busy flags.
///
/// Both panels are hidden at the start of every search; nothing else
/// keeps them mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiVisibilityState {
    /// Results panel shown.
    pub results_visible: bool,
    /// Error panel shown.
    pub error_visible: bool,
    /// A lookup is in flight.
    pub busy: bool,
}

/// Everything the view draws, apart from styles and the spinner.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Identifier being edited.
    pub field: IdentifierField,
    affordance: SubmitAffordance,
    results: Option<RecommendationResult>,
    results_visible: bool,
    error_message: String,
    error_visible: bool,
    revealed: Option<Panel>,
    notifications: NotificationStack,
}

impl UiState {
    /// Initial state: empty field, idle, both panels hidden.
    pub fn new(timings: BannerTimings) -> Self {
        Self {
            notifications: NotificationStack::new(timings),
            ..Self::default()
        }
    }

    /// Snapshot of the visibility and busy flags.
    pub fn visibility(&self) -> UiVisibilityState {
        UiVisibilityState {
            results_visible: self.results_visible,
            error_visible: self.error_visible,
            busy: self.affordance.is_busy(),
        }
    }

    /// Submit affordance.
    pub fn affordance(&self) -> &SubmitAffordance {
        &self.affordance
    }

    /// Last rendered result, whether or not its panel is visible.
    pub fn results(&self) -> Option<&RecommendationResult> {
        self.results.as_ref()
    }

    /// Content of the error panel.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Panel last scrolled into view, if it is still visible.
    pub fn revealed(&self) -> Option<Panel> {
        self.revealed
    }

    /// Live banners.
    pub fn notifications(&self) -> &NotificationStack {
        &self.notifications
    }

    /// Store `result`, show the results panel and reveal it.
    pub fn show_result(&mut self, result: RecommendationResult) {
        self.results = Some(result);
        self.results_visible = true;
        self.revealed = Some(Panel::Results);
    }

    /// Replace the error text, show the error panel and reveal it.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.error_visible = true;
        self.revealed = Some(Panel::Error);
    }

    /// Hide the results panel. Idempotent.
    pub fn hide_results(&mut self) {
        self.results_visible = false;
        if self.revealed == Some(Panel::Results) {
            self.revealed = None;
        }
    }

    /// Hide the error panel. Idempotent.
    pub fn hide_error(&mut self) {
        self.error_visible = false;
        if self.revealed == Some(Panel::Error) {
            self.revealed = None;
        }
    }

    /// Enter or leave busy on the submit affordance.
    pub fn set_busy(&mut self, busy: bool) {
        if busy {
            self.affordance.enter_busy();
        } else {
            self.affordance.exit_busy();
        }
    }

    /// Push a banner created at `now`.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.notifications.push(kind, message, now);
    }

    /// Advance time-driven state. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.tick(now) > 0
    }
}

/// UI state shared between the render loop and in-flight operations.
///
/// The lock is only ever held for a single synchronous update, never across
/// an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SharedUi(Arc<Mutex<UiState>>);

impl SharedUi {
    /// Wrap `state` for sharing.
    pub fn new(state: UiState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    /// Lock the state. A poisoned lock is recovered, not propagated.
    pub fn lock(&self) -> MutexGuard<'_, UiState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderPort for SharedUi {
    fn show_result(&self, result: &RecommendationResult) {
        self.lock().show_result(result.clone());
    }

    fn show_error(&self, message: &str) {
        self.lock().show_error(message);
    }

    fn hide_results(&self) {
        self.lock().hide_results();
    }

    fn hide_error(&self) {
        self.lock().hide_error();
    }

    fn set_busy(&self, busy: bool) {
        self.lock().set_busy(busy);
    }

    fn notify(&self, kind: NotificationKind, message: &str) {
        self.lock().notify(kind, message, Instant::now());
    }
}
