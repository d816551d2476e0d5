//! SmartSum API
//!
//! HTTP client layer for the SmartSum backend:
//! - URL content resolution (`/api/fetch-url-content/`)
//! - Summarization (`/api/summarize/`)
//! - Token auth (`/api/token/`, `/api/register/`)
//!
//! All failures surface as the closed [`ApiError`] taxonomy; raw transport
//! errors never cross this crate's boundary. Credential attachment funnels
//! through a single request helper so the bearer header is applied
//! uniformly to every authenticated call.

pub mod auth;
pub mod client;
pub mod http_client;
pub mod provider;
pub mod types;

// Re-export main types
pub use auth::{attach_credentials, TokenProvider};
pub use client::{validate_url, ApiClient};
pub use http_client::build_http_client;
pub use provider::{parse_http_error, transport_error, ContentExtractor, Summarizer};
pub use types::*;
