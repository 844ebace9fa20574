//! Submit affordance and its busy state.
//!
//! Entering busy disables the affordance, swaps its label for the loading
//! label, and remembers the prior label. Leaving busy restores that label
//! exactly. Both transitions are idempotent: entering twice keeps the first
//! saved label, leaving twice only acts once.

/// Label shown on the submit affordance while idle.
pub const SUBMIT_LABEL: &str = "Search";

/// Label shown next to the spinner while a lookup is in flight.
pub const LOADING_LABEL: &str = "Searching...";

/// The control that triggers a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAffordance {
    label: String,
    enabled: bool,
    saved_label: Option<String>,
}

impl Default for SubmitAffordance {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

impl SubmitAffordance {
    /// Idle affordance showing `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            saved_label: None,
        }
    }

    /// Label currently shown.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// False while busy.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Busy means a prior label is saved and waiting for restoration.
    pub fn is_busy(&self) -> bool {
        self.saved_label.is_some()
    }

    /// Disable and show the loading label. Keeps the first saved label.
    pub fn enter_busy(&mut self) {
        if self.saved_label.is_none() {
            self.saved_label = Some(std::mem::replace(
                &mut self.label,
                LOADING_LABEL.to_string(),
            ));
        }
        self.enabled = false;
    }

    /// Restore the saved label. No-op when nothing is saved.
    pub fn exit_busy(&mut self) {
        if let Some(saved) = self.saved_label.take() {
            self.label = saved;
            self.enabled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_enabled() {
        let affordance = SubmitAffordance::default();
        assert_eq!(affordance.label(), SUBMIT_LABEL);
        assert!(affordance.is_enabled());
        assert!(!affordance.is_busy());
    }

    #[test]
    fn enter_busy_swaps_label_and_disables() {
        let mut affordance = SubmitAffordance::default();
        affordance.enter_busy();
        assert_eq!(affordance.label(), LOADING_LABEL);
        assert!(!affordance.is_enabled());
        assert!(affordance.is_busy());
    }

    #[test]
    fn exit_busy_restores_exact_prior_label() {
        let mut affordance = SubmitAffordance::new("Find formations");
        affordance.enter_busy();
        affordance.exit_busy();
        assert_eq!(affordance.label(), "Find formations");
        assert!(affordance.is_enabled());
    }

    #[test]
    fn entering_twice_keeps_first_saved_label() {
        let mut affordance = SubmitAffordance::default();
        affordance.enter_busy();
        affordance.enter_busy();
        affordance.exit_busy();
        assert_eq!(affordance.label(), SUBMIT_LABEL);
    }

    #[test]
    fn exiting_twice_is_harmless() {
        let mut affordance = SubmitAffordance::default();
        affordance.enter_busy();
        affordance.exit_busy();
        affordance.exit_busy();
        assert_eq!(affordance.label(), SUBMIT_LABEL);
        assert!(affordance.is_enabled());
    }

    #[test]
    fn exit_without_enter_is_noop() {
        let mut affordance = SubmitAffordance::default();
        affordance.exit_busy();
        assert_eq!(affordance, SubmitAffordance::default());
    }
}
