//! HTTP server initialization and runtime setup.
//!
//! Builds the status source, starts the poll worker and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::StatusPoller;
use crate::config::Config;
use crate::domain::board::StatusBoard;
use crate::domain::poll_worker::PollWorker;
use crate::infrastructure::source;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Status source (HTTP or file, by URL scheme)
/// - Status board and poller
/// - Background poll worker (first poll immediately)
/// - Axum HTTP server
///
/// On Ctrl-C / SIGTERM the server drains in-flight requests, then the poll
/// worker is stopped.
///
/// # Errors
///
/// Returns an error if:
/// - The status source cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let source = source::from_url(&config.status_url, config.fetch_timeout())?;
    let board = Arc::new(StatusBoard::new());
    let poller = Arc::new(StatusPoller::new(source, board));

    let worker = PollWorker::start(
        poller.clone(),
        config.poll_interval(),
        config.fetch_retries,
    );

    let state = AppState::new(poller, config.poll_interval());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let served = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    worker.stop().await;
    served?;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
