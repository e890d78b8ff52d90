//! Source trait for fetching the status document.

use crate::domain::entities::StatusDocument;
use crate::error::PollError;
use async_trait::async_trait;

/// Where the status document comes from.
///
/// # Implementations
///
/// - [`crate::infrastructure::source::HttpStatusSource`] - HTTP(S) GET via `reqwest`
/// - [`crate::infrastructure::source::FileStatusSource`] - Local file written by the checker
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches and parses the current document.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Fetch`] when the source is unreachable,
    /// [`PollError::Status`] on a non-success HTTP status and
    /// [`PollError::Parse`] when the body is not a JSON object.
    async fn fetch(&self) -> Result<StatusDocument, PollError>;

    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;
}
