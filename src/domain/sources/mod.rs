//! Source trait definitions for retrieving the status document.
//!
//! Traits are defined here in the domain layer and implemented by the
//! infrastructure layer (see [`crate::infrastructure::source`]).

pub mod status_source;

#[cfg(test)]
pub use status_source::MockStatusSource;
pub use status_source::StatusSource;
