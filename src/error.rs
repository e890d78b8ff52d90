//! Error types for polling and for the HTTP surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Failure of a single poll attempt.
///
/// None of these are fatal: the board keeps its previous contents and the
/// next tick tries again.
#[derive(Debug, Error)]
pub enum PollError {
    /// The source could not be reached or read (DNS, connect, timeout, IO).
    #[error("failed to fetch status document from {source_url}: {message}")]
    Fetch { source_url: String, message: String },

    /// The source answered with a non-success HTTP status.
    #[error("status source {source_url} responded with HTTP {status}")]
    Status { source_url: String, status: u16 },

    /// The body was not a JSON object.
    #[error("status document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to render status board: {0}")]
    Render(#[from] askama::Error),
}

impl PollError {
    pub fn fetch(source_url: impl Into<String>, message: impl ToString) -> Self {
        Self::Fetch {
            source_url: source_url.into(),
            message: message.to_string(),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Fetch { .. } => "network",
            PollError::Status { .. } => "http_status",
            PollError::Parse(_) => "parse",
            PollError::Render(_) => "render",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<PollError> for AppError {
    fn from(e: PollError) -> Self {
        match e {
            PollError::Render(_) => AppError::internal(e.to_string(), json!({ "kind": e.kind() })),
            _ => AppError::upstream(e.to_string(), json!({ "kind": e.kind() })),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
