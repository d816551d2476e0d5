//! Invoker Traits and Failure Mapping
//!
//! Defines the seams the orchestration layer depends on and the helpers
//! that translate raw HTTP outcomes into the [`ApiError`] taxonomy.

use async_trait::async_trait;

use crate::types::{ApiError, ApiResult, ErrorResponse};
use smartsum_core::Granularity;

/// Longest backend message echoed into an error value
const MAX_MESSAGE_LEN: usize = 200;

/// Resolves a web-page address into plain text.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetch and extract the readable text behind `url`.
    ///
    /// Empty or whitespace-only extracted text is a failure
    /// (`ApiError::EmptyContent`), never an empty success.
    async fn extract(&self, url: &str) -> ApiResult<String>;
}

/// Produces a summary for already-resolved content.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` at the requested granularity.
    ///
    /// An empty result is a failure (`ApiError::EmptySummary`).
    async fn summarize(&self, text: &str, granularity: Granularity) -> ApiResult<String>;
}

/// Map a non-success HTTP status to a typed failure.
///
/// The backend sends `{"error": ..., "code": ...}` bodies; the error text
/// is carried into the variant when present.
pub fn parse_http_error(status: u16, body: &str) -> ApiError {
    let message = extract_error_message(body);
    match status {
        401 => ApiError::AuthenticationRejected {
            message: message.unwrap_or_else(|| "session credential rejected".to_string()),
        },
        403 => ApiError::AccessDenied {
            message: message.unwrap_or_else(|| "access denied".to_string()),
        },
        404 => ApiError::NotFound {
            message: message.unwrap_or_else(|| "resource not found".to_string()),
        },
        408 => ApiError::Timeout {
            message: message.unwrap_or_else(|| "the server reported a timeout".to_string()),
        },
        400 | 422 => ApiError::InvalidRequest {
            message: message.unwrap_or_else(|| "request rejected".to_string()),
        },
        500..=599 => ApiError::ServerError {
            message: message.unwrap_or_else(|| "backend failure".to_string()),
            status: Some(status),
        },
        _ => ApiError::Other {
            message: format!("HTTP {}: {}", status, snippet(body)),
        },
    }
}

/// Map a reqwest transport failure to a typed failure.
pub fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            message: "the server took too long to respond".to_string(),
        }
    } else if err.is_connect() {
        ApiError::Connection {
            message: "could not reach the server".to_string(),
        }
    } else if err.is_decode() {
        ApiError::Parse {
            message: err.to_string(),
        }
    } else {
        ApiError::Other {
            message: err.to_string(),
        }
    }
}

/// Pull the backend's error text out of a failure body, if it has one
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed
        .error
        .filter(|msg| !msg.trim().is_empty())
        .map(|msg| snippet(&msg))
}

fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > MAX_MESSAGE_LEN {
        let cut: String = trimmed.chars().take(MAX_MESSAGE_LEN).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
