//! Local file status source.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::StatusDocument;
use crate::domain::sources::StatusSource;
use crate::error::PollError;

/// Reads the status document from disk.
///
/// Used when the checker runs on the same host and writes its `status.json`
/// locally.
pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StatusSource for FileStatusSource {
    async fn fetch(&self) -> Result<StatusDocument, PollError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| PollError::fetch(self.path.display().to_string(), e))?;
        debug!(path = %self.path.display(), bytes = body.len(), "Read status document");

        Ok(StatusDocument::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"example.com": {{"online": true, "latency": 42}}}}"#
        )
        .unwrap();

        let source = FileStatusSource::new(file.path());
        let doc = source.fetch().await.unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.entries()[0].name, "example.com");
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileStatusSource::new(dir.path().join("status.json"));

        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ truncated").unwrap();

        let source = FileStatusSource::new(file.path());
        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
