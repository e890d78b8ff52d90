mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use status_board::api::handlers::{board_fragment_handler, board_handler, refresh_handler};
use status_board::state::AppState;
use status_board::web::handlers::dashboard_handler;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(dashboard_handler))
        .route("/board", get(board_fragment_handler))
        .route("/api/board", get(board_handler))
        .route("/api/refresh", post(refresh_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── DASHBOARD ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_before_first_poll() {
    let state = common::create_test_state(common::SwitchableSource::new(common::EXAMPLE));
    let server = make_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<div id=\"status-container\"></div>"));
    assert!(html.contains("Waiting for the first status update."));
    assert!(html.contains("content=\"300\""));
}

#[tokio::test]
async fn test_dashboard_shows_cards() {
    let state = common::create_test_state(common::SwitchableSource::new(common::TWO_SITES));
    state.poller.poll().await.unwrap();
    let server = make_server(state);

    let html = server.get("/").await.text();

    assert!(html.contains("<div id=\"status-container\">"));
    assert!(html.contains("<div class=\"status-card online\">"));
    assert!(html.contains("<div class=\"status-card offline\">"));
    assert!(html.contains("<h2>example.com</h2>"));
    assert!(html.contains("Latency: 42ms"));
    assert!(html.contains("SSL Expiry: SSL Error: timed out"));
    assert!(html.contains("1 of 2 sites online."));
}

#[tokio::test]
async fn test_dashboard_warns_when_degraded() {
    let source = common::SwitchableSource::new(common::EXAMPLE);
    let state = common::create_test_state(source.clone());
    state.poller.poll().await.unwrap();
    source.go_down();
    let _ = state.poller.poll().await;
    let server = make_server(state);

    let html = server.get("/").await.text();

    assert!(html.contains("Latest update failed: network"));
    // Previous cards stay on screen
    assert!(html.contains("<h2>example.com</h2>"));
}

// ─── BOARD ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_board_fragment_matches_board() {
    let state = common::create_test_state(common::SwitchableSource::new(common::EXAMPLE));
    state.poller.poll().await.unwrap();
    let expected = state.board.html().await;
    let server = make_server(state);

    let response = server.get("/board").await;

    response.assert_status_ok();
    assert_eq!(response.text(), expected);
}

#[tokio::test]
async fn test_board_json() {
    let state = common::create_test_state(common::SwitchableSource::new(common::TWO_SITES));
    state.poller.poll().await.unwrap();
    let server = make_server(state);

    let json = server.get("/api/board").await.json::<serde_json::Value>();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["sequence"], 1);
    assert_eq!(json["sites"], 2);
    assert_eq!(json["online"], 1);
    assert!(json["updated_at"].is_string());
    assert!(json.get("last_error").is_none());
    assert!(json["html"].as_str().unwrap().contains("down.example"));
}

// ─── REFRESH ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_renders_new_document() {
    let source = common::SwitchableSource::new(common::EXAMPLE);
    let state = common::create_test_state(source.clone());
    state.poller.poll().await.unwrap();
    source.set_body(common::TWO_SITES);
    let board = state.board.clone();
    let server = make_server(state);

    let response = server.post("/api/refresh").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["sequence"], 2);
    assert_eq!(json["applied"], true);
    assert_eq!(json["sites"], 2);
    assert!(board.html().await.contains("down.example"));
}

#[tokio::test]
async fn test_refresh_failure_keeps_board() {
    let source = common::SwitchableSource::new(common::EXAMPLE);
    let state = common::create_test_state(source.clone());
    state.poller.poll().await.unwrap();
    let before = state.board.html().await;
    source.go_down();
    let board = state.board.clone();
    let server = make_server(state);

    let response = server.post("/api/refresh").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(json["error"]["details"]["kind"], "network");
    assert_eq!(board.html().await, before);
}

#[tokio::test]
async fn test_refresh_with_malformed_document() {
    let source = common::SwitchableSource::new("this is not json");
    let state = common::create_test_state(source);
    let server = make_server(state);

    let response = server.post("/api/refresh").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["kind"], "parse");
}
