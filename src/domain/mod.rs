//! Domain layer containing the status model, the display board and the poll loop.
//!
//! # Architecture
//!
//! - [`entities`] - Status document and per-site status
//! - [`sources`] - Status source trait definitions
//! - [`board`] - The shared display region
//! - [`poll_worker`] - Recurring poll task with start/stop control
//!
//! # Poll Flow
//!
//! 1. [`poll_worker::PollWorker`] ticks (immediately, then every interval)
//! 2. [`crate::application::services::StatusPoller`] fetches via [`sources::StatusSource`]
//! 3. The document is rendered into cards
//! 4. The cards are published to [`board::StatusBoard`] unless a newer poll already has been

pub mod board;
pub mod entities;
pub mod poll_worker;
pub mod sources;
