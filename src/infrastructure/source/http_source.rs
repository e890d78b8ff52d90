//! HTTP(S) status source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};
use url::Url;

use crate::domain::entities::StatusDocument;
use crate::domain::sources::StatusSource;
use crate::error::PollError;

const USER_AGENT: &str = concat!("status-board/", env!("CARGO_PKG_VERSION"));

/// Fetches the status document with a plain GET.
///
/// The request carries a timeout so a hung upstream cannot stall the poll
/// loop past the next tick.
pub struct HttpStatusSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpStatusSource {
    /// Creates a source for `url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Fetch`] if the HTTP client cannot be built.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PollError::fetch(url.as_str(), e))?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<StatusDocument, PollError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PollError::fetch(self.url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status {
                source_url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PollError::fetch(self.url.as_str(), e))?;
        debug!(bytes = body.len(), "Fetched status document");

        Ok(StatusDocument::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
