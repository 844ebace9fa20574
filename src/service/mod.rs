//! Recommendation service boundary.
//!
//! The controllers only see the [`RecommendationService`] trait. Replies are
//! handed back undigested (status + decoded JSON body) so that every
//! interpretation rule lives in the controllers.

pub mod http;
pub mod scripted;

pub use http::{parse_base_url, HttpRecommendationService};
pub use scripted::ScriptedService;

use crate::model::{MemberId, TransportError};
use async_trait::async_trait;
use serde_json::Value;

/// Path prefix of the lookup endpoint.
pub const RECOMMENDATIONS_PATH: &str = "recommendations";
/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "health";

/// A completed HTTP exchange with a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceReply {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body.
    pub body: Value,
}

impl ServiceReply {
    /// Build a reply from a status and a decoded body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// String value of a top-level body field, if present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(Value::as_str)
    }
}

/// Consumed HTTP contract of the recommendation service.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// `GET {base}/recommendations/{member_id}`
    async fn fetch_recommendations(
        &self,
        member_id: MemberId,
    ) -> Result<ServiceReply, TransportError>;

    /// `GET {base}/health`
    async fn fetch_health(&self) -> Result<ServiceReply, TransportError>;
}
