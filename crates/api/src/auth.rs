//! Credential Attachment
//!
//! The session token lives outside this crate (the application persists
//! it); the client reads it through the [`TokenProvider`] seam on every
//! call. Attachment is centralized here so the bearer header policy is
//! applied in exactly one place.

use reqwest::RequestBuilder;

/// Source of the current session credential.
///
/// At most one token is active at a time. `clear_token` destroys the
/// session; implementations persist the change synchronously.
pub trait TokenProvider: Send + Sync {
    /// The current bearer token, if a session is active
    fn get_token(&self) -> Option<String>;

    /// Replace the session with a new token
    fn set_token(&self, token: &str);

    /// Destroy the session
    fn clear_token(&self);
}

/// Attach the current session credential to an outgoing request.
///
/// Without a token the request proceeds unauthenticated; the backend is
/// expected to reject it with 401, which callers handle uniformly.
pub fn attach_credentials(builder: RequestBuilder, tokens: &dyn TokenProvider) -> RequestBuilder {
    match tokens.get_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}
