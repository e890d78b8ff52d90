//! API route configuration.

use crate::api::handlers::{board_handler, refresh_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET  /board`   - Board metadata and rendered region
/// - `POST /refresh` - Run one poll now
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/board", get(board_handler))
        .route("/refresh", post(refresh_handler))
}
