//! Core domain entities.
//!
//! - [`StatusDocument`] - The whole feed, site name to status, in document order
//! - [`SiteStatus`] - One site's reported state
//! - [`Reading`] - A reported value that may be numeric or free text
//!
//! Entities are plain data structures. Parsing is lenient at the field level
//! and strict only about the document being a JSON object.

pub mod site_status;
pub mod status_document;

pub use site_status::{Reading, SiteStatus};
pub use status_document::{SiteEntry, StatusDocument};
