//! Tagged outcomes of search and health operations.

use super::identifiers::MemberId;
use super::recommendation::RecommendationResult;
use serde_json::Value;

/// Result of one search operation. Exactly one outcome is rendered per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The member was found and has formations.
    Success(RecommendationResult),
    /// The service answered 404 for this member.
    NotFound(MemberId),
    /// Any other failure. Carries the message for the error panel.
    Failure(String),
}

impl OperationOutcome {
    /// User-facing message for the error panel, `None` for success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::NotFound(id) => Some(not_found_message(*id)),
            Self::Failure(message) => Some(message.clone()),
        }
    }
}

/// Message shown when the service answers 404 for a member.
pub fn not_found_message(id: MemberId) -> String {
    format!("Member {id} not found in the database.")
}

/// Liveness of the recommendation service as reported by `/health`.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    /// 2xx with `status == "ok"`.
    Ok,
    /// Service answered but did not report `"ok"`. Carries the decoded payload.
    Degraded(Value),
    /// The request never completed. Carries the transport error text.
    Unreachable(String),
}

impl HealthStatus {
    /// Banner severity for this status.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Ok => NotificationKind::Success,
            Self::Degraded(_) => NotificationKind::Warning,
            Self::Unreachable(_) => NotificationKind::Error,
        }
    }

    /// Banner text for this status.
    pub fn banner_text(&self) -> &'static str {
        match self {
            Self::Ok => "✅ API operational",
            Self::Degraded(_) => "⚠️ API running in degraded mode",
            Self::Unreachable(_) => "❌ API unreachable",
        }
    }
}

/// Severity of a notification banner, which selects its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Green banner.
    Success,
    /// Yellow banner.
    Warning,
    /// Red banner.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn not_found_message_names_the_member() {
        let id = MemberId::new(42).unwrap();
        let message = OperationOutcome::NotFound(id).error_message().unwrap();
        assert!(message.contains("42"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn success_has_no_error_message() {
        let id = MemberId::new(1).unwrap();
        let outcome = OperationOutcome::Success(RecommendationResult::from_raw(id, "A"));
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn failure_message_is_verbatim() {
        let outcome = OperationOutcome::Failure("boom".to_string());
        assert_eq!(outcome.error_message().as_deref(), Some("boom"));
    }

    #[test]
    fn health_kinds_map_to_severity() {
        assert_eq!(HealthStatus::Ok.kind(), NotificationKind::Success);
        assert_eq!(
            HealthStatus::Degraded(json!({"status": "degraded"})).kind(),
            NotificationKind::Warning
        );
        assert_eq!(
            HealthStatus::Unreachable("refused".into()).kind(),
            NotificationKind::Error
        );
    }
}
