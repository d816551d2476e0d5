//! API Client
//!
//! The HTTP implementation of the invoker traits, plus the unauthenticated
//! auth endpoints. All calls funnel through one request helper so
//! credential attachment and failure mapping happen uniformly.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::{attach_credentials, TokenProvider};
use crate::http_client::build_http_client;
use crate::provider::{parse_http_error, transport_error, ContentExtractor, Summarizer};
use crate::types::{
    ApiConfig, ApiError, ApiResult, FetchUrlContentRequest, FetchUrlContentResponse,
    RegisterRequest, SummarizeRequest, SummarizeResponse, TokenRequest, TokenResponse,
};
use async_trait::async_trait;
use smartsum_core::Granularity;

/// Endpoint paths, relative to the configured base URL
const FETCH_URL_CONTENT_PATH: &str = "api/fetch-url-content/";
const SUMMARIZE_PATH: &str = "api/summarize/";
const TOKEN_PATH: &str = "api/token/";
const REGISTER_PATH: &str = "api/register/";

/// Client for the SmartSum backend
pub struct ApiClient {
    config: ApiConfig,
    client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Create a new client with the given configuration and token source
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        let backstop = config.fetch_timeout.max(config.summarize_timeout) + Duration::from_secs(5);
        let client = build_http_client(backstop);
        Self {
            config,
            client,
            tokens,
        }
    }

    /// Obtain a session token for the given credentials.
    ///
    /// The caller stores the returned token via its `TokenProvider`.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = TokenRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let text = self
            .post_json(TOKEN_PATH, &body, crate::types::DEFAULT_TIMEOUT, false)
            .await?;
        let parsed: TokenResponse = parse_body(&text)?;
        Ok(parsed.access)
    }

    /// Create a new account
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<()> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json(REGISTER_PATH, &body, crate::types::DEFAULT_TIMEOUT, false)
            .await?;
        Ok(())
    }

    /// POST a JSON body and return the raw success body.
    ///
    /// Non-success statuses and transport failures are mapped into the
    /// `ApiError` taxonomy here, once, for every endpoint.
    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
        authenticated: bool,
    ) -> ApiResult<String> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        debug!(%url, "api request");

        let mut builder = self.client.post(&url).timeout(timeout).json(body);
        if authenticated {
            builder = attach_credentials(builder, self.tokens.as_ref());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;

        if !(200..300).contains(&status) {
            return Err(parse_http_error(status, &text));
        }
        Ok(text)
    }
}

#[async_trait]
impl ContentExtractor for ApiClient {
    async fn extract(&self, url: &str) -> ApiResult<String> {
        let body = FetchUrlContentRequest {
            url: url.to_string(),
        };
        let text = self
            .post_json(FETCH_URL_CONTENT_PATH, &body, self.config.fetch_timeout, true)
            .await?;
        let parsed: FetchUrlContentResponse = parse_body(&text)?;
        if parsed.content.trim().is_empty() {
            return Err(ApiError::EmptyContent);
        }
        Ok(parsed.content)
    }
}

#[async_trait]
impl Summarizer for ApiClient {
    async fn summarize(&self, text: &str, granularity: Granularity) -> ApiResult<String> {
        let body = SummarizeRequest {
            text: text.to_string(),
            summary_type: granularity,
        };
        let raw = self
            .post_json(SUMMARIZE_PATH, &body, self.config.summarize_timeout, true)
            .await?;
        let parsed: SummarizeResponse = parse_body(&raw)?;
        if parsed.summary.trim().is_empty() {
            return Err(ApiError::EmptySummary);
        }
        Ok(parsed.summary)
    }
}

fn parse_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse {
        message: e.to_string(),
    })
}

/// Check that an input is a syntactically valid absolute http/https URL.
///
/// This runs locally, before any network call; anything it rejects never
/// reaches the resolver endpoint.
pub fn validate_url(input: &str) -> Result<url::Url, String> {
    let parsed = url::Url::parse(input.trim()).map_err(|e| format!("invalid URL: {}", e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err("only http and https URLs are supported".to_string());
    }
    if parsed.host_str().is_none() {
        return Err("URL has no host".to_string());
    }
    Ok(parsed)
}
