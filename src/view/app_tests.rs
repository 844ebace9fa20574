//! Tests for key dispatch and the application shell.

use super::*;
use crate::model::{NotificationKind, VALIDATION_MESSAGE};
use crate::service::{ScriptedService, ServiceReply};
use crate::state::BannerTimings;
use ratatui::backend::TestBackend;
use serde_json::json;
use std::time::Duration;

// ===== Test Helpers =====

fn create_test_app() -> (Arc<ScriptedService>, TuiApp<TestBackend>) {
    let service = Arc::new(ScriptedService::new());
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app = TuiApp::new(
        terminal,
        service.clone(),
        &ResolvedConfig::default(),
        ColorConfig::new(false),
    );
    (service, app)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        assert!(!app.handle_key(key(KeyCode::Char(ch))));
    }
}

fn field_text(app: &TuiApp<TestBackend>) -> String {
    app.ui().lock().field.text().to_string()
}

impl TuiApp<TestBackend> {
    /// Await every spawned operation.
    async fn settle(&mut self) {
        for task in std::mem::take(&mut self.in_flight) {
            task.await.unwrap();
        }
    }
}

// ===== Quit =====

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn handle_key_ctrl_c_returns_true() {
    let (_, mut app) = create_test_app();
    assert!(app.handle_key(ctrl('c')), "Ctrl+C should trigger quit");
}

#[test]
fn handle_key_ctrl_q_returns_true() {
    let (_, mut app) = create_test_app();
    assert!(app.handle_key(ctrl('q')), "Ctrl+Q should trigger quit");
}

#[test]
fn handle_key_q_does_not_quit() {
    let (_, mut app) = create_test_app();
    assert!(!app.handle_key(key(KeyCode::Char('q'))));
    assert_eq!(field_text(&app), "", "letters never reach the field");
}

// ===== Field editing =====

#[test]
fn typing_keeps_only_digits() {
    let (_, mut app) = create_test_app();
    type_text(&mut app, "4a2-");
    assert_eq!(field_text(&app), "42");
}

#[test]
fn editing_keys_move_cursor_and_delete() {
    let (_, mut app) = create_test_app();
    type_text(&mut app, "123");

    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(field_text(&app), "13");

    app.handle_key(key(KeyCode::Home));
    app.handle_key(key(KeyCode::Delete));
    assert_eq!(field_text(&app), "3");

    app.handle_key(key(KeyCode::End));
    type_text(&mut app, "9");
    assert_eq!(field_text(&app), "39");
}

#[test]
fn escape_clears_the_field() {
    let (_, mut app) = create_test_app();
    type_text(&mut app, "77");
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(field_text(&app), "");
}

#[test]
fn paste_is_sanitised() {
    let (_, mut app) = create_test_app();
    assert!(!app.handle_event(Event::Paste(" 12 34\n".to_string())));
    assert_eq!(field_text(&app), "1234");
}

#[test]
fn key_release_is_ignored() {
    let (_, mut app) = create_test_app();
    let mut release = ctrl('c');
    release.kind = KeyEventKind::Release;
    assert!(!app.handle_event(Event::Key(release)));
}

// ===== Operations =====

#[tokio::test]
async fn enter_submits_the_field() {
    let (service, mut app) = create_test_app();
    service.push_lookup(Ok(ServiceReply::new(
        200,
        json!({"ID_Membre": 15, "Predicted_Formations": "Excel, SQL"}),
    )));
    type_text(&mut app, "15");

    assert!(!app.handle_key(key(KeyCode::Enter)));
    app.settle().await;

    assert_eq!(service.calls(), vec!["/recommendations/15"]);
    let state = app.ui().lock();
    assert!(state.visibility().results_visible);
    assert!(!state.visibility().busy);
    assert_eq!(
        state.results().map(|r| r.formations.clone()),
        Some(vec!["Excel".to_string(), "SQL".to_string()])
    );
}

#[tokio::test]
async fn enter_on_empty_field_shows_validation_error() {
    let (service, mut app) = create_test_app();

    app.handle_key(key(KeyCode::Enter));
    app.settle().await;

    assert!(service.calls().is_empty());
    let state = app.ui().lock();
    assert!(state.visibility().error_visible);
    assert_eq!(state.error_message(), VALIDATION_MESSAGE);
}

#[tokio::test]
async fn function_key_runs_example_and_fills_field() {
    let (service, mut app) = create_test_app();
    service.push_lookup(Ok(ServiceReply::new(404, json!({}))));

    app.handle_key(key(KeyCode::F(2)));
    assert_eq!(field_text(&app), "2");
    app.settle().await;

    assert_eq!(service.calls(), vec!["/recommendations/2"]);
    assert_eq!(
        app.ui().lock().error_message(),
        "Member 2 not found in the database."
    );
}

#[tokio::test]
async fn unconfigured_example_does_nothing() {
    let (service, mut app) = create_test_app();

    app.handle_key(key(KeyCode::F(9)));
    app.settle().await;

    assert!(service.calls().is_empty());
    assert_eq!(field_text(&app), "");
}

#[tokio::test]
async fn start_runs_health_check_and_initial_lookup() {
    let (service, mut app) = create_test_app();
    service.push_health(Ok(ServiceReply::new(200, json!({"status": "ok"}))));
    service.push_lookup(Ok(ServiceReply::new(
        200,
        json!({"ID_Membre": 5, "Predicted_Formations": "Python"}),
    )));

    app.start(Some(MemberId::new(5).unwrap()));
    app.settle().await;

    let mut calls = service.calls();
    calls.sort();
    assert_eq!(calls, vec!["/health", "/recommendations/5"]);
    assert_eq!(field_text(&app), "5");
    let state = app.ui().lock();
    assert_eq!(state.notifications().len(), 1);
    assert!(state.visibility().results_visible);
}

// ===== Tick and draw =====

#[test]
fn tick_removes_expired_banners() {
    let (_, mut app) = create_test_app();
    let start = Instant::now();
    app.ui()
        .lock()
        .notify(NotificationKind::Warning, "degraded", start);

    app.on_tick(start + Duration::from_millis(200));
    assert_eq!(app.ui().lock().notifications().len(), 1);

    app.on_tick(start + BannerTimings::default().lifetime());
    assert!(app.ui().lock().notifications().is_empty());
}

#[test]
fn tick_advances_spinner_only_while_busy() {
    let (_, mut app) = create_test_app();
    app.on_tick(Instant::now());
    assert_eq!(app.spinner, LoadingIndicator::new());

    app.ui().lock().set_busy(true);
    app.on_tick(Instant::now());
    assert_ne!(app.spinner, LoadingIndicator::new());
}

#[test]
fn draw_renders_without_error() {
    let (_, mut app) = create_test_app();
    type_text(&mut app, "31");
    app.draw().unwrap();

    let buffer = app.terminal().backend().buffer();
    let input_row: String = (0..buffer.area.width)
        .map(|x| buffer[(x, 2)].symbol())
        .collect();
    assert!(input_row.contains("31"), "{input_row}");
}
