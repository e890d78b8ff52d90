//! Data Transfer Objects for API responses.

pub mod board;
pub mod health;
