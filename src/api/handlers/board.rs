//! Handlers exposing the current board.

use axum::{Json, extract::State, http::header, response::IntoResponse};

use crate::api::dto::board::BoardResponse;
use crate::state::AppState;

/// Returns board metadata and the rendered region.
///
/// # Endpoint
///
/// `GET /api/board`
pub async fn board_handler(State(state): State<AppState>) -> Json<BoardResponse> {
    Json(state.board.snapshot().await.into())
}

/// Returns the raw region markup, for embedding into another page.
///
/// # Endpoint
///
/// `GET /board`
pub async fn board_fragment_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        state.board.html().await,
    )
}
