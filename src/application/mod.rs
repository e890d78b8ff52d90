//! Application layer services.
//!
//! Services consume the [`crate::domain::sources::StatusSource`] trait and
//! publish into the [`crate::domain::board::StatusBoard`].
//!
//! # Available Services
//!
//! - [`services::poll_service::StatusPoller`] - One fetch-parse-render cycle
//! - [`services::render_service`] - Status document to HTML cards

pub mod services;
