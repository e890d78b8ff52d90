//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::board::BoardHealth;
use crate::state::AppState;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html`: a summary line and the board region
/// inside `#status-container`. The page reloads itself every poll interval.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Pre-rendered, already escaped card markup.
    pub board: String,
    pub sites: usize,
    pub online: usize,
    /// Empty until the first successful poll.
    pub updated_at: String,
    /// Empty unless the newest poll failed.
    pub last_error: String,
    pub refresh_secs: u64,
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.board.snapshot().await;
    let degraded = snapshot.health() == BoardHealth::Degraded;

    DashboardTemplate {
        updated_at: snapshot
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_default(),
        last_error: match (&snapshot.last_failure, degraded) {
            (Some(failure), true) => failure.kind.to_string(),
            _ => String::new(),
        },
        sites: snapshot.rendered.sites,
        online: snapshot.rendered.online,
        board: snapshot.rendered.html,
        refresh_secs: state.poll_interval.as_secs().max(1),
    }
}
