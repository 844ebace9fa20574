//! Request sequencing for overlapping lookups.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed to one lookup when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Position in the sequence, starting at 1.
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Monotonically increasing lookup counter.
///
/// Only the most recently issued ticket may apply its settlement; earlier
/// lookups that settle afterwards are stale.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    /// Sequence with no tickets issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. It becomes the latest.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no later ticket has been issued since `ticket`.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
