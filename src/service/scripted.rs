//! In-memory service with scripted replies, for tests and demos.
//!
//! Replies are consumed in order per endpoint. A gated reply holds its
//! settlement until the returned sender fires, which lets callers control
//! the order in which overlapping requests settle.

use super::{RecommendationService, ServiceReply, HEALTH_PATH, RECOMMENDATIONS_PATH};
use crate::model::{MemberId, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

type Settlement = Result<ServiceReply, TransportError>;

struct Scripted {
    settlement: Settlement,
    gate: Option<oneshot::Receiver<()>>,
}

/// In-memory service that replays queued settlements.
///
/// Each call pops the next scripted settlement for its endpoint. A gated
/// settlement waits until its sender fires, which lets tests control the
/// order in which overlapping requests complete.
#[derive(Default)]
pub struct ScriptedService {
    lookups: Mutex<VecDeque<Scripted>>,
    health: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedService {
    /// Service with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the settlement of the next lookup.
    pub fn push_lookup(&self, settlement: Settlement) -> &Self {
        lock(&self.lookups).push_back(Scripted {
            settlement,
            gate: None,
        });
        self
    }

    /// Queue a lookup settlement that waits for the returned sender.
    ///
    /// Dropping the sender releases the gate as well.
    pub fn push_gated_lookup(&self, settlement: Settlement) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        lock(&self.lookups).push_back(Scripted {
            settlement,
            gate: Some(rx),
        });
        tx
    }

    /// Queue the settlement of the next health check.
    pub fn push_health(&self, settlement: Settlement) -> &Self {
        lock(&self.health).push_back(Scripted {
            settlement,
            gate: None,
        });
        self
    }

    /// Paths requested so far, in order (e.g. `/recommendations/7`).
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    async fn settle(&self, queue: &Mutex<VecDeque<Scripted>>, path: String) -> Settlement {
        lock(&self.calls).push(path.clone());
        let next = lock(queue).pop_front();
        let Some(scripted) = next else {
            return Err(TransportError::Request {
                url: path,
                reason: "no scripted reply".to_string(),
            });
        };
        if let Some(gate) = scripted.gate {
            // A dropped sender also opens the gate.
            let _ = gate.await;
        }
        scripted.settlement
    }
}

#[async_trait]
impl RecommendationService for ScriptedService {
    async fn fetch_recommendations(&self, member_id: MemberId) -> Settlement {
        self.settle(&self.lookups, format!("/{RECOMMENDATIONS_PATH}/{member_id}"))
            .await
    }

    async fn fetch_health(&self) -> Settlement {
        self.settle(&self.health, format!("/{HEALTH_PATH}")).await
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
