//! Rendering of the status document into HTML cards.

use askama::Template;

use crate::domain::board::RenderedBoard;
use crate::domain::entities::{Reading, SiteEntry, StatusDocument};
use crate::error::PollError;

/// Placeholder shown for missing or unusable values.
pub const MISSING: &str = "N/A";

/// Display values for one card, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub state: &'static str,
    pub latency: String,
    pub uptime: String,
    pub ssl_expiry: String,
    pub last_check: String,
    /// Empty when the checker reported no error.
    pub error: String,
    /// HTTP status the checker saw, shown on offline cards. Empty when unknown.
    pub status_code: String,
}

impl CardView {
    pub fn from_entry(entry: &SiteEntry) -> Self {
        let status = &entry.status;
        Self {
            name: entry.name.clone(),
            state: status.state_class(),
            latency: with_unit(status.latency.as_ref(), "ms"),
            uptime: with_unit(status.uptime.as_ref(), "%"),
            ssl_expiry: with_unit(status.ssl_days_remaining.as_ref(), " days"),
            last_check: with_unit(status.last_check.as_ref(), ""),
            error: status.error.clone().unwrap_or_default(),
            status_code: status
                .status_code
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Appends `unit` to numeric readings; text is shown verbatim.
fn with_unit(reading: Option<&Reading>, unit: &str) -> String {
    match reading {
        Some(r) if r.is_number() => format!("{r}{unit}"),
        Some(r) => r.to_string(),
        None => MISSING.to_string(),
    }
}

/// Fragment template: one `status-card` per site.
#[derive(Template)]
#[template(path = "cards.html")]
pub struct CardsTemplate {
    pub cards: Vec<CardView>,
}

/// Renders every entry of `document`, in document order.
///
/// Rendering is deterministic: the same document always yields the same bytes.
///
/// # Errors
///
/// Returns [`PollError::Render`] if the template fails.
pub fn render_board(document: &StatusDocument) -> Result<RenderedBoard, PollError> {
    let cards: Vec<CardView> = document.entries().iter().map(CardView::from_entry).collect();
    let html = CardsTemplate { cards }.render()?;

    Ok(RenderedBoard {
        html,
        sites: document.len(),
        online: document.online_count(),
    })
}
