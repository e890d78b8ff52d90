//! Background worker that re-polls the status source on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::application::services::{PollOutcome, StatusPoller};
use crate::error::PollError;

/// Shortest accepted poll interval.
pub const MIN_PERIOD: Duration = Duration::from_secs(1);

/// Upper bound for the pause between immediate retries within one tick.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Handle to a running poll loop.
///
/// The loop polls once immediately, then every `period`, until [`PollWorker::stop`]
/// is called. A poll that has already started is allowed to finish.
pub struct PollWorker {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PollWorker {
    /// Spawns the poll loop on the current Tokio runtime.
    ///
    /// `retries` is the number of immediate retries after a failed poll
    /// before waiting for the next tick. A zero `period` is raised to
    /// [`MIN_PERIOD`].
    pub fn start(poller: Arc<StatusPoller>, period: Duration, retries: usize) -> Self {
        let period = if period < MIN_PERIOD {
            warn!(
                "Poll interval {:?} is below the minimum, using {:?}",
                period, MIN_PERIOD
            );
            MIN_PERIOD
        } else {
            period
        };

        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(run_poll_worker(poller, period, retries, shutdown_rx));
        Self { shutdown, handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Signals the loop to exit and waits for it.
    ///
    /// An in-flight poll attempt finishes first; pending retries are abandoned.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            warn!("Poll worker terminated abnormally: {}", e);
        }
        info!("Poll worker stopped");
    }
}

/// Poll loop body. Exits when `shutdown` changes or its sender is dropped.
///
/// # Panics
///
/// Panics if `period` is zero; [`PollWorker::start`] guards against that.
pub async fn run_poll_worker(
    poller: Arc<StatusPoller>,
    period: Duration,
    retries: usize,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Poll worker started: source={}, interval={}s, retries={}",
        poller.source_description(),
        period.as_secs(),
        retries
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => break,
        }

        let result = match poller.poll().await {
            Err(_) if retries > 0 => {
                tokio::select! {
                    result = retry_poll(&poller, retries) => result,
                    _ = shutdown.changed() => break,
                }
            }
            result => result,
        };

        match result {
            Ok(outcome) => debug!(sequence = outcome.sequence(), "Poll tick finished"),
            Err(e) => warn!(
                kind = e.kind(),
                "Status poll failed, keeping previous board until next tick: {}", e
            ),
        }
    }
}

/// Retries a failed poll with exponential backoff, waiting before every attempt.
async fn retry_poll(poller: &StatusPoller, retries: usize) -> Result<PollOutcome, PollError> {
    let mut delays = ExponentialBackoff::from_millis(2)
        .factor(250)
        .max_delay(MAX_RETRY_DELAY)
        .map(jitter)
        .take(retries);

    if let Some(first) = delays.next() {
        tokio::time::sleep(first).await;
    }
    Retry::start(delays, || poller.poll()).await
}
