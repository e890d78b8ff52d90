//! Business logic services for the application layer.

pub mod poll_service;
pub mod render_service;

pub use poll_service::{PollOutcome, StatusPoller};
pub use render_service::{CardView, render_board};
