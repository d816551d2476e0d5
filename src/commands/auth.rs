//! Auth Commands
//!
//! Login, registration, and logout against the token endpoints.

use crate::state::AppState;
use crate::utils::error::AppResult;
use smartsum_api::{ApiError, TokenProvider};

/// Obtain and store a session token
pub async fn login(state: &AppState, username: &str, password: &str) -> AppResult<()> {
    match state.api().login(username, password).await {
        Ok(token) => {
            state.session().set_token(&token);
            println!("Logged in as {}.", username);
            Ok(())
        }
        Err(ApiError::AuthenticationRejected { .. }) => {
            eprintln!("Invalid username or password. Please try again.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Create a new account
pub async fn register(state: &AppState, username: &str, email: &str, password: &str) -> AppResult<()> {
    match state.api().register(username, email, password).await {
        Ok(()) => {
            println!("Account created. You can now log in.");
            Ok(())
        }
        Err(ApiError::InvalidRequest { message }) => {
            eprintln!("Registration failed: {}", message);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Destroy the current session
pub async fn logout(state: &AppState) -> AppResult<()> {
    state.session().clear_token();
    println!("Logged out.");
    Ok(())
}
