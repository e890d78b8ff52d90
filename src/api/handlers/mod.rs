//! HTTP request handlers for API endpoints.

pub mod board;
pub mod health;
pub mod refresh;

pub use board::{board_fragment_handler, board_handler};
pub use health::health_handler;
pub use refresh::refresh_handler;
