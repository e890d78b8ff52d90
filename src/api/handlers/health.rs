//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::board::{BoardHealth, BoardSnapshot};
use crate::state::AppState;

/// Returns service health derived from the board.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Board is current, or no poll has completed yet
/// - **503 Service Unavailable**: The newest poll failed; stale content is shown
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "board": { "status": "ok", "message": "3 sites, 2 online" },
///     "last_poll": { "status": "ok", "message": "Poll #12 rendered at 2024-01-01T00:00:00Z" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let snapshot = state.board.snapshot().await;
    let health = snapshot.health();

    let response = HealthResponse {
        status: health.as_str().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            board: check_board(&snapshot),
            last_poll: check_last_poll(&snapshot, health),
        },
    };

    if health == BoardHealth::Degraded {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    } else {
        Ok(Json(response))
    }
}

fn check_board(snapshot: &BoardSnapshot) -> CheckStatus {
    match snapshot.updated_at {
        Some(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} sites, {} online",
                snapshot.rendered.sites, snapshot.rendered.online
            )),
        },
        None => CheckStatus {
            status: "pending".to_string(),
            message: Some("Nothing rendered yet".to_string()),
        },
    }
}

fn check_last_poll(snapshot: &BoardSnapshot, health: BoardHealth) -> CheckStatus {
    match (health, &snapshot.last_failure, snapshot.updated_at) {
        (BoardHealth::Degraded, Some(failure), _) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!(
                "Poll #{} failed ({}): {}",
                failure.sequence, failure.kind, failure.message
            )),
        },
        (_, _, Some(updated_at)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Poll #{} rendered at {}",
                snapshot.sequence,
                updated_at.to_rfc3339()
            )),
        },
        _ => CheckStatus {
            status: "pending".to_string(),
            message: None,
        },
    }
}
