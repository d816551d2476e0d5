//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application's directory and the files
//! inside it.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the SmartSum directory (~/.smartsum/)
pub fn smartsum_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".smartsum"))
}

/// Get the config file path (~/.smartsum/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(smartsum_dir()?.join("config.json"))
}

/// Get the session file path (~/.smartsum/session.json)
pub fn session_path() -> AppResult<PathBuf> {
    Ok(smartsum_dir()?.join("session.json"))
}

/// Get the history file path (~/.smartsum/history.json)
pub fn history_path() -> AppResult<PathBuf> {
    Ok(smartsum_dir()?.join("history.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the SmartSum directory, creating if it doesn't exist
pub fn ensure_smartsum_dir() -> AppResult<PathBuf> {
    let path = smartsum_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
