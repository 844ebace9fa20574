//! Health monitor: one liveness check, one transient banner.

use crate::model::{HealthStatus, TransportError};
use crate::port::RenderPort;
use crate::service::{RecommendationService, ServiceReply};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Body field carrying the liveness status.
pub const STATUS_FIELD: &str = "status";
/// The only status value treated as healthy.
pub const HEALTHY_STATUS: &str = "ok";

/// Classify a settled health request.
///
/// Healthy needs both a 2xx reply and `status == "ok"`. Any other decoded
/// reply (including a 503 "degraded") is degraded.
pub fn interpret_health(settled: Result<ServiceReply, TransportError>) -> HealthStatus {
    match settled {
        Ok(reply) if reply.is_success() && reply.str_field(STATUS_FIELD) == Some(HEALTHY_STATUS) => {
            HealthStatus::Ok
        }
        Ok(reply) => HealthStatus::Degraded(reply.body),
        Err(err) => HealthStatus::Unreachable(err.to_string()),
    }
}

/// Checks service liveness and reports it as a banner.
pub struct HealthMonitor {
    service: Arc<dyn RecommendationService>,
    port: Arc<dyn RenderPort>,
}

impl HealthMonitor {
    /// Monitor reporting through `port`.
    pub fn new(service: Arc<dyn RecommendationService>, port: Arc<dyn RenderPort>) -> Self {
        Self { service, port }
    }

    /// Query `/health`, log the outcome and push a banner for it.
    ///
    /// Runs independently of any search; it never touches the panels or the
    /// busy state.
    pub async fn check_health(&self) -> HealthStatus {
        let status = interpret_health(self.service.fetch_health().await);
        match &status {
            HealthStatus::Ok => info!("SkillForge API operational"),
            HealthStatus::Degraded(payload) => {
                warn!(payload = %payload, "SkillForge API running in degraded mode")
            }
            HealthStatus::Unreachable(details) => {
                error!(error = %details, "SkillForge API unreachable")
            }
        }
        self.port.notify(status.kind(), status.banner_text());
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationKind;
    use crate::port::{RecordingPort, RenderEvent};
    use crate::service::ScriptedService;
    use serde_json::json;

    fn setup() -> (Arc<ScriptedService>, Arc<RecordingPort>, HealthMonitor) {
        let service = Arc::new(ScriptedService::new());
        let port = Arc::new(RecordingPort::new());
        let monitor = HealthMonitor::new(service.clone(), port.clone());
        (service, port, monitor)
    }

    #[test]
    fn ok_status_is_healthy() {
        let status = interpret_health(Ok(ServiceReply::new(200, json!({"status": "ok"}))));
        assert_eq!(status, HealthStatus::Ok);
    }

    #[test]
    fn other_status_value_is_degraded() {
        let body = json!({"status": "OK"});
        let status = interpret_health(Ok(ServiceReply::new(200, body.clone())));
        assert_eq!(status, HealthStatus::Degraded(body));
    }

    #[test]
    fn non_2xx_is_degraded_even_with_ok_status() {
        let body = json!({"status": "ok"});
        let status = interpret_health(Ok(ServiceReply::new(503, body.clone())));
        assert_eq!(status, HealthStatus::Degraded(body));
    }

    #[test]
    fn transport_failure_is_unreachable() {
        let status = interpret_health(Err(TransportError::Request {
            url: "http://127.0.0.1:1/health".into(),
            reason: "connection refused".into(),
        }));
        assert!(matches!(status, HealthStatus::Unreachable(ref d) if d.contains("connection refused")));
    }

    #[tokio::test]
    async fn healthy_check_pushes_success_banner() {
        let (service, port, monitor) = setup();
        service.push_health(Ok(ServiceReply::new(200, json!({"status": "ok"}))));

        let status = monitor.check_health().await;

        assert_eq!(status, HealthStatus::Ok);
        assert_eq!(service.calls(), vec!["/health"]);
        insta::assert_snapshot!(port.transcript(), @"notify Success ✅ API operational");
    }

    #[tokio::test]
    async fn degraded_check_pushes_warning_banner() {
        let (service, port, monitor) = setup();
        service.push_health(Ok(ServiceReply::new(
            503,
            json!({"status": "degraded", "error": "Fichier introuvable"}),
        )));

        monitor.check_health().await;

        assert_eq!(
            port.events(),
            vec![RenderEvent::Notify(
                NotificationKind::Warning,
                "⚠️ API running in degraded mode".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn unreachable_check_pushes_error_banner_only() {
        let (service, port, monitor) = setup();
        service.push_health(Err(TransportError::Request {
            url: "http://127.0.0.1:1/health".into(),
            reason: "connection refused".into(),
        }));

        monitor.check_health().await;

        let events = port.events();
        assert_eq!(events.len(), 1, "health never touches panels or busy");
        assert!(matches!(
            &events[0],
            RenderEvent::Notify(NotificationKind::Error, message) if message == "❌ API unreachable"
        ));
    }
}
