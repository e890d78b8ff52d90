//! # Status Board
//!
//! A small dashboard that polls the JSON feed published by a website checker
//! and renders one HTML card per monitored site.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Status entities, the display board, the poll loop
//! - **Application Layer** ([`application`]) - Polling and rendering services
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP and file status sources
//! - **API Layer** ([`api`]) - JSON endpoints, health check, tracing middleware
//! - **Web Layer** ([`web`]) - HTML dashboard page
//!
//! ## Behaviour
//!
//! - The feed is polled once at startup, then every `POLL_INTERVAL_SECS` (default 300)
//! - A failed poll leaves the previous cards on screen and marks the board degraded
//! - Overlapping polls are ordered by sequence number; stale results are dropped
//!
//! ## Quick Start
//!
//! ```bash
//! export STATUS_URL="https://example.com/status.json"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, PollError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PollOutcome, StatusPoller, render_board};
    pub use crate::domain::board::{BoardHealth, StatusBoard};
    pub use crate::domain::entities::{SiteStatus, StatusDocument};
    pub use crate::domain::poll_worker::PollWorker;
    pub use crate::domain::sources::StatusSource;
    pub use crate::error::{AppError, PollError};
    pub use crate::state::AppState;
}
