//! HTTP adapter tests against a local one-shot server.
//!
//! Each test binds an ephemeral port, serves exactly one canned reply and
//! reports back the request line it received.

use serde_json::json;
use skillforge::controller::{HealthMonitor, QueryController};
use skillforge::model::{HealthStatus, MemberId, TransportError};
use skillforge::port::{RecordingPort, RenderEvent};
use skillforge::service::{parse_base_url, HttpRecommendationService, RecommendationService};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ===== Test Helpers =====

/// Serve one reply. Returns the server root and a handle yielding the
/// request line.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}"), handle)
}

fn service_for(root: &str) -> HttpRecommendationService {
    let base = parse_base_url(root).unwrap();
    HttpRecommendationService::new(base, Some(Duration::from_secs(5))).unwrap()
}

fn id(raw: u64) -> MemberId {
    MemberId::new(raw).unwrap()
}

// ===== Adapter =====

#[tokio::test]
async fn lookup_hits_recommendations_path_and_decodes_body() {
    let (root, server) = serve_once(
        "200 OK",
        r#"{"ID_Membre": 7, "Predicted_Formations": "Excel, SQL"}"#,
    )
    .await;

    let reply = service_for(&root).fetch_recommendations(id(7)).await.unwrap();

    assert_eq!(server.await.unwrap(), "GET /recommendations/7 HTTP/1.1");
    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.body,
        json!({"ID_Membre": 7, "Predicted_Formations": "Excel, SQL"})
    );
}

#[tokio::test]
async fn base_path_is_kept_when_joining() {
    let (root, server) = serve_once("200 OK", r#"{"status": "ok"}"#).await;

    service_for(&format!("{root}/api/v1"))
        .fetch_health()
        .await
        .unwrap();

    assert_eq!(server.await.unwrap(), "GET /api/v1/health HTTP/1.1");
}

#[tokio::test]
async fn error_status_is_passed_through() {
    let (root, server) = serve_once(
        "404 Not Found",
        r#"{"ID_Membre": 42, "Predicted_Formations": null}"#,
    )
    .await;

    let reply = service_for(&root)
        .fetch_recommendations(id(42))
        .await
        .unwrap();
    server.await.unwrap();

    assert_eq!(reply.status, 404);
    assert!(!reply.is_success());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (root, server) = serve_once("500 Internal Server Error", "<html>oops</html>").await;

    let err = service_for(&root)
        .fetch_recommendations(id(1))
        .await
        .unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, TransportError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = service_for(&format!("http://{addr}"))
        .fetch_health()
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request { .. }), "{err:?}");
}

// ===== Controllers over HTTP =====

#[tokio::test]
async fn lookup_over_http_renders_tags() {
    let (root, server) = serve_once(
        "200 OK",
        r#"{"ID_Membre": 3, "Predicted_Formations": "Python, Machine Learning"}"#,
    )
    .await;
    let port = Arc::new(RecordingPort::new());
    let controller = QueryController::new(Arc::new(service_for(&root)), port.clone());

    controller.submit_search(" 3 ").await;
    server.await.unwrap();

    assert_eq!(
        port.events().last().map(ToString::to_string).as_deref(),
        Some("show_result 3 [Python | Machine Learning]")
    );
}

#[tokio::test]
async fn degraded_health_over_http() {
    let (root, server) = serve_once(
        "503 Service Unavailable",
        r#"{"status": "degraded", "error": "model not loaded"}"#,
    )
    .await;
    let port = Arc::new(RecordingPort::new());
    let monitor = HealthMonitor::new(Arc::new(service_for(&root)), port.clone());

    let status = monitor.check_health().await;
    server.await.unwrap();

    assert!(matches!(status, HealthStatus::Degraded(_)));
    assert!(matches!(
        port.events().as_slice(),
        [RenderEvent::Notify(skillforge::model::NotificationKind::Warning, _)]
    ));
}
