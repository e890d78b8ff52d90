//! One fetch-parse-render cycle against the status source.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use metrics::{counter, gauge};
use tracing::{debug, info, warn};

use crate::application::services::render_service::render_board;
use crate::domain::board::StatusBoard;
use crate::domain::sources::StatusSource;
use crate::error::PollError;

/// Result of a successful poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The board now shows this poll's rendering.
    Rendered { sequence: u64, sites: usize },
    /// A newer poll finished first; this result was dropped.
    Stale { sequence: u64 },
}

impl PollOutcome {
    pub fn sequence(&self) -> u64 {
        match self {
            PollOutcome::Rendered { sequence, .. } | PollOutcome::Stale { sequence } => *sequence,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, PollOutcome::Rendered { .. })
    }
}

/// Polls the status source and publishes the rendered cards to the board.
///
/// Each call takes a new sequence number before fetching, so when polls
/// overlap the one that *started* last wins, regardless of completion order.
pub struct StatusPoller {
    source: Arc<dyn StatusSource>,
    board: Arc<StatusBoard>,
    sequence: AtomicU64,
}

impl StatusPoller {
    /// Creates a new poller.
    pub fn new(source: Arc<dyn StatusSource>, board: Arc<StatusBoard>) -> Self {
        Self {
            source,
            board,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn board(&self) -> &Arc<StatusBoard> {
        &self.board
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Runs one poll.
    ///
    /// On failure the board keeps its previous contents and the failure is
    /// recorded for health reporting.
    ///
    /// # Errors
    ///
    /// Returns the [`PollError`] of the fetch, parse or render step.
    pub async fn poll(&self) -> Result<PollOutcome, PollError> {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(sequence, source = %self.source.describe(), "Polling status source");

        match self.fetch_and_render(sequence).await {
            Ok(outcome) => {
                let label = if outcome.is_applied() { "rendered" } else { "stale" };
                counter!("status_board_polls_total", "outcome" => label).increment(1);
                Ok(outcome)
            }
            Err(e) => {
                counter!("status_board_polls_total", "outcome" => e.kind()).increment(1);
                self.board.record_failure(sequence, &e).await;
                Err(e)
            }
        }
    }

    async fn fetch_and_render(&self, sequence: u64) -> Result<PollOutcome, PollError> {
        let document = self.source.fetch().await?;
        let rendered = render_board(&document)?;
        let sites = rendered.sites;
        let online = rendered.online;

        if self.board.publish(sequence, rendered).await {
            gauge!("status_board_sites").set(sites as f64);
            info!(sequence, sites, online, "Status board updated");
            Ok(PollOutcome::Rendered { sequence, sites })
        } else {
            warn!(sequence, "Dropping stale poll result, a newer poll already rendered");
            Ok(PollOutcome::Stale { sequence })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::BoardHealth;
    use crate::domain::entities::StatusDocument;
    use crate::domain::sources::MockStatusSource;

    const EXAMPLE: &[u8] = br#"{"example.com": {"online": true, "latency": 42, "uptime": 99.9, "ssl_days_remaining": 30, "last_check": "2024-01-01T00:00:00Z"}}"#;

    fn example_doc() -> StatusDocument {
        StatusDocument::from_slice(EXAMPLE).unwrap()
    }

    fn poller_with(mock: MockStatusSource) -> StatusPoller {
        StatusPoller::new(Arc::new(mock), Arc::new(StatusBoard::new()))
    }

    #[tokio::test]
    async fn test_poll_renders_to_board() {
        let mut mock = MockStatusSource::new();
        mock.expect_fetch().times(1).returning(|| Ok(example_doc()));
        mock.expect_describe().returning(|| "mock".to_string());

        let poller = poller_with(mock);
        let outcome = poller.poll().await.unwrap();

        assert_eq!(
            outcome,
            PollOutcome::Rendered {
                sequence: 1,
                sites: 1
            }
        );
        let html = poller.board().html().await;
        assert!(html.contains("<h2>example.com</h2>"));
        assert!(html.contains("Latency: 42ms"));
    }

    #[tokio::test]
    async fn test_repoll_with_same_document_is_byte_identical() {
        let mut mock = MockStatusSource::new();
        mock.expect_fetch().times(2).returning(|| Ok(example_doc()));
        mock.expect_describe().returning(|| "mock".to_string());

        let poller = poller_with(mock);
        poller.poll().await.unwrap();
        let first = poller.board().html().await;
        poller.poll().await.unwrap();
        let second = poller.board().html().await;

        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(poller.board().snapshot().await.sequence, 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_output() {
        let mut mock = MockStatusSource::new();
        let mut calls = 0;
        mock.expect_fetch().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(example_doc())
            } else {
                Err(PollError::fetch("mock", "connection refused"))
            }
        });
        mock.expect_describe().returning(|| "mock".to_string());

        let poller = poller_with(mock);
        poller.poll().await.unwrap();
        let before = poller.board().html().await;

        let err = poller.poll().await.unwrap_err();
        assert_eq!(err.kind(), "network");

        let snapshot = poller.board().snapshot().await;
        assert_eq!(snapshot.rendered.html, before);
        assert_eq!(snapshot.health(), BoardHealth::Degraded);
        assert_eq!(snapshot.last_failure.unwrap().sequence, 2);
    }

    #[tokio::test]
    async fn test_parse_failure_is_reported() {
        let mut mock = MockStatusSource::new();
        mock.expect_fetch()
            .times(1)
            .returning(|| Err(StatusDocument::from_slice(b"not json").unwrap_err().into()));
        mock.expect_describe().returning(|| "mock".to_string());

        let poller = poller_with(mock);
        let err = poller.poll().await.unwrap_err();

        assert_eq!(err.kind(), "parse");
        assert!(poller.board().html().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_document_clears_region() {
        let mut mock = MockStatusSource::new();
        let mut calls = 0;
        mock.expect_fetch().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(example_doc())
            } else {
                Ok(StatusDocument::default())
            }
        });
        mock.expect_describe().returning(|| "mock".to_string());

        let poller = poller_with(mock);
        poller.poll().await.unwrap();
        let outcome = poller.poll().await.unwrap();

        assert_eq!(
            outcome,
            PollOutcome::Rendered {
                sequence: 2,
                sites: 0
            }
        );
        assert!(poller.board().html().await.trim().is_empty());
    }
}
