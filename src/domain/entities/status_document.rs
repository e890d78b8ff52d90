//! The status document published by the external monitoring job.

use serde_json::{Map, Value};

use super::site_status::SiteStatus;

/// One site and its status, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteEntry {
    pub name: String,
    pub status: SiteStatus,
}

/// Mapping from site identifier to [`SiteStatus`].
///
/// Entries keep the order in which they appear in the JSON body. The document
/// is transient: it is parsed for one render pass and then dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusDocument {
    entries: Vec<SiteEntry>,
}

impl StatusDocument {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Fails when the body is not JSON or its top level is not an object.
    /// Malformed entries do not fail the parse; see [`SiteStatus::from_value`].
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_slice(body)?;
        Ok(Self::from_map(map))
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .map(|(name, value)| {
                let status = SiteStatus::from_value(value).unwrap_or_else(|| {
                    tracing::warn!(site = %name, "status entry is not an object, rendering as offline");
                    SiteStatus::default()
                });
                SiteEntry { name, status }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[SiteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn online_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.online).count()
    }
}
