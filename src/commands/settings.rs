//! Settings Commands
//!
//! Commands for reading and updating application settings.

use crate::models::settings::SettingsUpdate;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Print the current configuration
pub async fn show(state: &AppState) -> AppResult<()> {
    let config = state.get_config().await;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Apply a partial settings update
pub async fn set(state: &AppState, update: SettingsUpdate) -> AppResult<()> {
    let config = state.update_config(update).await?;
    println!("Settings updated.");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
