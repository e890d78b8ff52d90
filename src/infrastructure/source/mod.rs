//! Status source implementations.
//!
//! Provides two implementations of [`crate::domain::sources::StatusSource`]:
//! - [`HttpStatusSource`] - `http://` and `https://` URLs
//! - [`FileStatusSource`] - `file://` URLs

mod file_source;
mod http_source;

pub use file_source::FileStatusSource;
pub use http_source::HttpStatusSource;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::domain::sources::StatusSource;

/// Builds the source matching the URL scheme.
///
/// # Errors
///
/// Returns an error if the URL does not parse, uses an unsupported scheme,
/// or the HTTP client cannot be built.
pub fn from_url(raw: &str, timeout: Duration) -> Result<Arc<dyn StatusSource>> {
    let url = Url::parse(raw).with_context(|| format!("Invalid status URL '{}'", raw))?;

    match url.scheme() {
        "http" | "https" => {
            let source = HttpStatusSource::new(url, timeout)?;
            Ok(Arc::new(source))
        }
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| anyhow::anyhow!("Status URL '{}' is not a valid file path", raw))?;
            Ok(Arc::new(FileStatusSource::new(path)))
        }
        other => bail!("Unsupported status URL scheme '{}'", other),
    }
}
