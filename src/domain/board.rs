//! The display region: the most recently rendered status cards.
//!
//! The board is the only shared mutable state in the service. Polls publish
//! into it with a sequence number; a result is applied only if it is newer
//! than what is already shown, so overlapping polls cannot roll the board back.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::PollError;

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedBoard {
    pub html: String,
    pub sites: usize,
    pub online: usize,
}

/// The most recent failed poll.
#[derive(Debug, Clone, PartialEq)]
pub struct PollFailure {
    pub sequence: u64,
    pub kind: &'static str,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardHealth {
    /// No poll has completed yet.
    Pending,
    Healthy,
    /// The newest completed poll failed; stale content is shown.
    Degraded,
}

impl BoardHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardHealth::Pending => "pending",
            BoardHealth::Healthy => "healthy",
            BoardHealth::Degraded => "degraded",
        }
    }
}

/// Point-in-time copy of the board.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub sequence: u64,
    pub rendered: RenderedBoard,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_failure: Option<PollFailure>,
}

impl BoardSnapshot {
    pub fn health(&self) -> BoardHealth {
        match (&self.last_failure, self.updated_at) {
            (Some(failure), _) if failure.sequence > self.sequence => BoardHealth::Degraded,
            (_, Some(_)) => BoardHealth::Healthy,
            (_, None) => BoardHealth::Pending,
        }
    }
}

#[derive(Debug, Default)]
struct BoardState {
    sequence: u64,
    rendered: RenderedBoard,
    updated_at: Option<DateTime<Utc>>,
    last_failure: Option<PollFailure>,
}

/// Shared display region.
#[derive(Debug, Default)]
pub struct StatusBoard {
    state: RwLock<BoardState>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the board contents if `sequence` is newer than the applied one.
    ///
    /// Returns `false` when the result is stale and was dropped.
    pub async fn publish(&self, sequence: u64, rendered: RenderedBoard) -> bool {
        let mut state = self.state.write().await;
        if sequence <= state.sequence {
            return false;
        }

        state.sequence = sequence;
        state.rendered = rendered;
        state.updated_at = Some(Utc::now());
        true
    }

    /// Records a failed poll. The rendered content is left as it is.
    pub async fn record_failure(&self, sequence: u64, error: &PollError) {
        let mut state = self.state.write().await;
        if state
            .last_failure
            .as_ref()
            .is_some_and(|f| f.sequence >= sequence)
        {
            return;
        }

        state.last_failure = Some(PollFailure {
            sequence,
            kind: error.kind(),
            message: error.to_string(),
            at: Utc::now(),
        });
    }

    /// Current region markup.
    pub async fn html(&self) -> String {
        self.state.read().await.rendered.html.clone()
    }

    pub async fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.read().await;
        BoardSnapshot {
            sequence: state.sequence,
            rendered: state.rendered.clone(),
            updated_at: state.updated_at,
            last_failure: state.last_failure.clone(),
        }
    }
}
