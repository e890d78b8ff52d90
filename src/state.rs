//! Shared state injected into HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::StatusPoller;
use crate::domain::board::StatusBoard;

#[derive(Clone)]
pub struct AppState {
    pub poller: Arc<StatusPoller>,
    pub board: Arc<StatusBoard>,
    /// Used by the dashboard page to refresh itself in step with the poller.
    pub poll_interval: Duration,
}

impl AppState {
    pub fn new(poller: Arc<StatusPoller>, poll_interval: Duration) -> Self {
        let board = poller.board().clone();
        Self {
            poller,
            board,
            poll_interval,
        }
    }
}
