//! Session Storage
//!
//! Persists the bearer credential for the logged-in user. The analog of
//! the browser's local storage slot: one JSON document holding the token.
//!
//! At most one session is active at a time. Destroying the session removes
//! the persisted slot entirely; a malformed slot reads as logged-out
//! rather than failing startup.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_smartsum_dir, session_path};
use smartsum_api::TokenProvider;

/// On-disk shape of the session slot
#[derive(Debug, Serialize, Deserialize)]
struct SessionDocument {
    token: String,
}

/// Persistent store for the session credential
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// Open the session store at the default location
    pub fn new() -> AppResult<Self> {
        ensure_smartsum_dir()?;
        Ok(Self::at_path(session_path()?))
    }

    /// Open a session store backed by an explicit file path
    pub fn at_path(path: PathBuf) -> Self {
        let token = Self::read_slot(&path);
        Self {
            path,
            token: RwLock::new(token),
        }
    }

    /// Whether a session credential is currently present
    pub fn is_logged_in(&self) -> bool {
        self.token
            .read()
            .map(|token| token.is_some())
            .unwrap_or(false)
    }

    fn read_slot(path: &PathBuf) -> Option<String> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<SessionDocument>(&content) {
            Ok(doc) if !doc.token.trim().is_empty() => Some(doc.token),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "session slot is malformed, treating as logged out");
                None
            }
        }
    }

    fn write_slot(&self, token: &str) {
        let doc = SessionDocument {
            token: token.to_string(),
        };
        let result = serde_json::to_string_pretty(&doc)
            .map_err(|e| e.to_string())
            .and_then(|content| fs::write(&self.path, content).map_err(|e| e.to_string()));
        if let Err(e) = result {
            warn!(error = %e, "failed to persist session");
        }
    }

    fn remove_slot(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!(error = %e, "failed to remove session slot");
            }
        }
    }
}

impl TokenProvider for SessionStore {
    fn get_token(&self) -> Option<String> {
        self.token.read().map(|token| token.clone()).unwrap_or(None)
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
        self.write_slot(token);
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        self.remove_slot();
    }
}
