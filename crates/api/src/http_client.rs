//! HTTP Client Factory
//!
//! Provides a factory function for building the shared reqwest client.

use std::time::Duration;

/// User agent sent on every request
const USER_AGENT: &str = "SmartSum/0.1";

/// Redirect hops allowed before a request is abandoned
const MAX_REDIRECTS: usize = 5;

/// Build a `reqwest::Client` with the shared defaults.
///
/// Per-call bounds are tighter and applied on each request; the client-wide
/// timeout is a backstop.
pub fn build_http_client(default_timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(default_timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
