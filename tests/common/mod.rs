#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use status_board::application::services::StatusPoller;
use status_board::domain::board::StatusBoard;
use status_board::domain::entities::StatusDocument;
use status_board::domain::sources::StatusSource;
use status_board::error::PollError;
use status_board::state::AppState;

pub const EXAMPLE: &str = r#"{"example.com": {"online": true, "latency": 42, "uptime": 99.9, "ssl_days_remaining": 30, "last_check": "2024-01-01T00:00:00Z"}}"#;

pub const TWO_SITES: &str = r#"{
    "example.com": {"online": true, "latency": 42, "uptime": 99.9, "ssl_days_remaining": 30, "last_check": "2024-01-01T00:00:00Z"},
    "down.example": {"online": false, "latency": null, "uptime": 12.5, "ssl_days_remaining": "SSL Error: timed out", "last_check": "2024-01-01T00:00:00Z", "error": "Connection refused"}
}"#;

/// Source serving whatever body is currently set; `None` simulates an outage.
pub struct SwitchableSource {
    body: Mutex<Option<String>>,
}

impl SwitchableSource {
    pub fn new(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Mutex::new(Some(body.to_string())),
        })
    }

    pub fn set_body(&self, body: &str) {
        *self.body.lock().unwrap() = Some(body.to_string());
    }

    pub fn go_down(&self) {
        *self.body.lock().unwrap() = None;
    }
}

#[async_trait]
impl StatusSource for SwitchableSource {
    async fn fetch(&self) -> Result<StatusDocument, PollError> {
        let body = self.body.lock().unwrap().clone();
        match body {
            Some(body) => Ok(StatusDocument::from_slice(body.as_bytes())?),
            None => Err(PollError::fetch("switchable", "connection refused")),
        }
    }

    fn describe(&self) -> String {
        "switchable".to_string()
    }
}

pub fn create_test_state(source: Arc<dyn StatusSource>) -> AppState {
    let board = Arc::new(StatusBoard::new());
    let poller = Arc::new(StatusPoller::new(source, board));
    AppState::new(poller, Duration::from_secs(300))
}
