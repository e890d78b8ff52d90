//! Handler for on-demand polling.

use axum::{Json, extract::State};

use crate::api::dto::board::RefreshResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Runs one poll immediately.
///
/// # Endpoint
///
/// `POST /api/refresh`
///
/// # Response Codes
///
/// - **200 OK**: Poll finished; `applied` tells whether its result is on the board
/// - **502 Bad Gateway**: The status source could not be fetched or parsed
///
/// A failed refresh leaves the board as it was.
pub async fn refresh_handler(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let outcome = state.poller.poll().await.map_err(|e| {
        tracing::warn!(kind = e.kind(), "Manual refresh failed: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(outcome.into()))
}
