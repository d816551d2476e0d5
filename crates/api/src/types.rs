//! API Types
//!
//! Wire DTOs for the backend endpoints and the closed error taxonomy for
//! API operations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use smartsum_core::Granularity;

/// Default bound on a single API call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Bound on the URL content resolution call
    pub fetch_timeout: Duration,
    /// Bound on the summarization call
    pub summarize_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fetch_timeout: DEFAULT_TIMEOUT,
            summarize_timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Request body for `/api/fetch-url-content/`
#[derive(Debug, Clone, Serialize)]
pub struct FetchUrlContentRequest {
    pub url: String,
}

/// Response body from `/api/fetch-url-content/`
#[derive(Debug, Clone, Deserialize)]
pub struct FetchUrlContentResponse {
    pub content: String,
}

/// Request body for `/api/summarize/`
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub summary_type: Granularity,
}

/// Response body from `/api/summarize/`
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Request body for `/api/token/`
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Response body from `/api/token/`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request body for `/api/register/`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Error body shape the backend uses for failed requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
}

/// Error types for API operations.
///
/// Closed taxonomy: every transport or service failure maps to exactly one
/// variant, so callers can switch on the failure signal instead of parsing
/// message text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiError {
    /// The backend rejected the session credential (HTTP 401)
    AuthenticationRejected { message: String },
    /// Access to the resource was denied (HTTP 403)
    AccessDenied { message: String },
    /// The backend rejected the request as malformed (HTTP 400/422)
    InvalidRequest { message: String },
    /// The resource does not exist (HTTP 404)
    NotFound { message: String },
    /// The call exceeded its time bound
    Timeout { message: String },
    /// The backend could not be reached
    Connection { message: String },
    /// The backend failed internally (HTTP 5xx)
    ServerError {
        message: String,
        status: Option<u16>,
    },
    /// Content extraction produced nothing summarizable
    EmptyContent,
    /// The summarizer returned an empty result
    EmptySummary,
    /// The response body could not be parsed
    Parse { message: String },
    /// Anything else
    Other { message: String },
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::AuthenticationRejected { message } => {
                write!(f, "Authentication rejected: {}", message)
            }
            ApiError::AccessDenied { message } => write!(f, "Access denied: {}", message),
            ApiError::InvalidRequest { message } => write!(f, "Invalid request: {}", message),
            ApiError::NotFound { message } => write!(f, "Not found: {}", message),
            ApiError::Timeout { message } => write!(f, "Timed out: {}", message),
            ApiError::Connection { message } => write!(f, "Connection failed: {}", message),
            ApiError::ServerError { message, status } => {
                if let Some(s) = status {
                    write!(f, "Server error ({}): {}", s, message)
                } else {
                    write!(f, "Server error: {}", message)
                }
            }
            ApiError::EmptyContent => write!(f, "No summarizable content"),
            ApiError::EmptySummary => write!(f, "Empty summary response"),
            ApiError::Parse { message } => write!(f, "Parse error: {}", message),
            ApiError::Other { message } => write!(f, "Error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}
