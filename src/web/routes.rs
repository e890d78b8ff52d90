//! Web route configuration.

use crate::api::handlers::board_fragment_handler;
use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET /`      - Dashboard page
/// - `GET /board` - Bare board region
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/board", get(board_fragment_handler))
}
