//! Infrastructure layer for external integrations.
//!
//! Implements the source traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`source`] - HTTP and file status sources

pub mod source;
