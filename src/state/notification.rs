//! Transient notification banners (pure).
//!
//! Every banner follows the same time-driven lifecycle, fixed at creation:
//!
//! ```text
//! Created ──fade_in──▶ Visible ──(hold)──▶ FadingOut ──fade_out──▶ Removed
//! ```
//!
//! `hold` is measured from creation. The phase is a pure function of the time
//! elapsed since creation, so there is nothing to cancel and overlapping
//! banners never interfere with each other. Banners stack in creation order;
//! duplicates are not merged.

use crate::model::NotificationKind;
use std::time::{Duration, Instant};

/// Lifecycle timings shared by every banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTimings {
    /// Time from creation to fully visible.
    pub fade_in: Duration,
    /// Time from creation until fade-out starts.
    pub hold: Duration,
    /// Time from fade-out start to removal.
    pub fade_out: Duration,
}

impl Default for BannerTimings {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(100),
            hold: Duration::from_millis(5_000),
            fade_out: Duration::from_millis(300),
        }
    }
}

impl BannerTimings {
    /// Total time from creation until removal.
    pub fn lifetime(&self) -> Duration {
        self.hold + self.fade_out
    }

    /// Phase of a banner `elapsed` after its creation.
    pub fn phase_at(&self, elapsed: Duration) -> BannerPhase {
        if elapsed >= self.lifetime() {
            BannerPhase::Removed
        } else if elapsed >= self.hold {
            BannerPhase::FadingOut
        } else if elapsed >= self.fade_in {
            BannerPhase::Visible
        } else {
            BannerPhase::Created
        }
    }
}

/// Lifecycle phase of one banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BannerPhase {
    /// Attached but fully transparent.
    Created,
    /// Fully opaque.
    Visible,
    /// Fading towards transparent.
    FadingOut,
    /// Detached from the display.
    Removed,
}

impl BannerPhase {
    /// Whether the banner should be drawn at all.
    pub fn is_drawn(self) -> bool {
        matches!(self, Self::Visible | Self::FadingOut)
    }
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    id: u64,
    kind: NotificationKind,
    message: String,
    created_at: Instant,
}

impl Banner {
    /// Id assigned by the stack, unique per stack.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Severity.
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Banner text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// All live banners, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationStack {
    timings: BannerTimings,
    banners: Vec<Banner>,
    next_id: u64,
}

impl NotificationStack {
    /// Empty stack using `timings` for every banner.
    pub fn new(timings: BannerTimings) -> Self {
        Self {
            timings,
            banners: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a banner at `now`. Returns its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.banners.push(Banner {
            id,
            kind,
            message: message.into(),
            created_at: now,
        });
        id
    }

    /// Phase of a banner at `now`.
    pub fn phase_of(&self, banner: &Banner, now: Instant) -> BannerPhase {
        self.timings
            .phase_at(now.saturating_duration_since(banner.created_at))
    }

    /// Detach every banner that reached `Removed` by `now`.
    ///
    /// Returns how many banners were removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.banners.len();
        let timings = self.timings;
        self.banners.retain(|banner| {
            timings.phase_at(now.saturating_duration_since(banner.created_at))
                != BannerPhase::Removed
        });
        before - self.banners.len()
    }

    /// Banners that should be drawn at `now`, with their phase, oldest first.
    pub fn drawn(&self, now: Instant) -> impl Iterator<Item = (&Banner, BannerPhase)> + '_ {
        self.banners
            .iter()
            .map(move |banner| (banner, self.phase_of(banner, now)))
            .filter(|(_, phase)| phase.is_drawn())
    }

    /// Banners not yet removed, including ones still fading in.
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    /// No live banners.
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
