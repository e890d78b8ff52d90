//! DTOs for board inspection and manual refresh.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::PollOutcome;
use crate::domain::board::{BoardSnapshot, PollFailure};

/// Response for `GET /api/board`.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub status: &'static str,
    pub sequence: u64,
    pub sites: usize,
    pub online: usize,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<FailureInfo>,
    pub html: String,
}

impl From<BoardSnapshot> for BoardResponse {
    fn from(snapshot: BoardSnapshot) -> Self {
        Self {
            status: snapshot.health().as_str(),
            sequence: snapshot.sequence,
            sites: snapshot.rendered.sites,
            online: snapshot.rendered.online,
            updated_at: snapshot.updated_at,
            last_error: snapshot.last_failure.map(FailureInfo::from),
            html: snapshot.rendered.html,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FailureInfo {
    pub sequence: u64,
    pub kind: &'static str,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl From<PollFailure> for FailureInfo {
    fn from(f: PollFailure) -> Self {
        Self {
            sequence: f.sequence,
            kind: f.kind,
            message: f.message,
            at: f.at,
        }
    }
}

/// Response for `POST /api/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub sequence: u64,
    /// `false` when a newer poll finished first and this result was dropped.
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sites: Option<usize>,
}

impl From<PollOutcome> for RefreshResponse {
    fn from(outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Rendered { sequence, sites } => Self {
                sequence,
                applied: true,
                sites: Some(sites),
            },
            PollOutcome::Stale { sequence } => Self {
                sequence,
                applied: false,
                sites: None,
            },
        }
    }
}
