//! Query controller: the search lifecycle.
//!
//! ```text
//! idle ──lookup──▶ busy (panels hidden) ──settle──▶ idle + one outcome panel
//! ```
//!
//! Overlapping lookups are sequenced: only the most recently started lookup
//! applies its settlement. Older ones settle silently.

use super::sequence::RequestSequence;
use crate::model::{
    LookupError, MemberId, OperationOutcome, RecommendationResult, GENERIC_FAILURE_MESSAGE,
};
use crate::port::RenderPort;
use crate::service::{RecommendationService, ServiceReply};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Body field carrying the member id in lookup replies.
pub const MEMBER_ID_FIELD: &str = "ID_Membre";
/// Body field carrying the `", "`-delimited formations.
pub const FORMATIONS_FIELD: &str = "Predicted_Formations";
/// Body field carrying a server-side error message.
pub const ERROR_FIELD: &str = "error";

const NOT_FOUND_STATUS: u16 = 404;

/// Interpret a completed lookup reply.
///
/// Rules, in order:
/// - 2xx with a non-empty formations string → result
/// - 2xx otherwise → "no formation found"
/// - 404 → not found
/// - any other status → the server's `error` text, or a generic message
pub fn interpret_lookup(
    member_id: MemberId,
    reply: &ServiceReply,
) -> Result<RecommendationResult, LookupError> {
    if reply.is_success() {
        let Some(raw) = reply
            .str_field(FORMATIONS_FIELD)
            .filter(|raw| !raw.is_empty())
        else {
            return Err(LookupError::Domain(format!(
                "No formation found for member {member_id}."
            )));
        };

        let shown_id = reply
            .body
            .get(MEMBER_ID_FIELD)
            .and_then(Value::as_u64)
            .and_then(|raw| MemberId::new(raw).ok())
            .unwrap_or(member_id);
        return Ok(RecommendationResult::from_raw(shown_id, raw));
    }

    if reply.status == NOT_FOUND_STATUS {
        return Err(LookupError::NotFound(member_id));
    }

    let message = reply
        .str_field(ERROR_FIELD)
        .filter(|message| !message.is_empty())
        .unwrap_or(GENERIC_FAILURE_MESSAGE);
    Err(LookupError::Domain(message.to_string()))
}

/// Runs member lookups and renders exactly one outcome per search.
///
/// Overlapping lookups are sequenced: only the most recent one may leave
/// busy or render.
pub struct QueryController {
    service: Arc<dyn RecommendationService>,
    port: Arc<dyn RenderPort>,
    sequence: RequestSequence,
}

impl QueryController {
    /// Controller issuing requests to `service` and rendering through `port`.
    pub fn new(service: Arc<dyn RecommendationService>, port: Arc<dyn RenderPort>) -> Self {
        Self {
            service,
            port,
            sequence: RequestSequence::new(),
        }
    }

    /// Validate raw field text and look the member up.
    ///
    /// Invalid or empty input renders a validation failure and never reaches
    /// the network. Both panels are cleared first, but busy is not entered.
    pub async fn submit_search(&self, raw_input: &str) {
        match MemberId::parse(raw_input.trim()) {
            Ok(member_id) => self.lookup_member(member_id).await,
            Err(err) => {
                debug!(input = raw_input, error = %err, "search input rejected");
                self.port.hide_results();
                self.port.hide_error();
                self.render(LookupError::from(err).into());
            }
        }
    }

    /// Look up a known-good member id.
    ///
    /// Issues exactly one GET. Busy is entered before the request and left
    /// after it settles, on every path, before the reply is interpreted.
    pub async fn lookup_member(&self, member_id: MemberId) {
        let ticket = self.sequence.issue();
        self.port.set_busy(true);
        self.port.hide_results();
        self.port.hide_error();

        let settled = self.service.fetch_recommendations(member_id).await;

        if !self.sequence.is_latest(ticket) {
            debug!(
                %member_id,
                ticket = ticket.number(),
                "discarding settlement of superseded lookup"
            );
            return;
        }
        self.port.set_busy(false);

        let outcome = match settled
            .map_err(LookupError::from)
            .and_then(|reply| interpret_lookup(member_id, &reply))
        {
            Ok(result) => {
                info!(
                    %member_id,
                    formations = result.formations.len(),
                    "search: recommendations found"
                );
                OperationOutcome::Success(result)
            }
            Err(err) => {
                match &err {
                    LookupError::Transport(transport) => {
                        error!(%member_id, error = %transport, "search: API request failed")
                    }
                    LookupError::NotFound(_) => info!(%member_id, "search: member not found"),
                    other => warn!(%member_id, error = %other, "search: no usable result"),
                }
                err.into()
            }
        };
        self.render(outcome);
    }

    fn render(&self, outcome: OperationOutcome) {
        match outcome {
            OperationOutcome::Success(result) => self.port.show_result(&result),
            other => {
                if let Some(message) = other.error_message() {
                    self.port.show_error(&message);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
