//! Application State
//!
//! Wires the storage layer, the API client, and the orchestrator together
//! behind one struct the command layer works against.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::services::clipboard::Clipboard;
use crate::services::orchestrator::{Navigator, SummarizeOrchestrator};
use crate::storage::{ConfigService, FileHistoryBacking, HistoryStore, SessionStore};
use crate::utils::error::AppResult;
use smartsum_api::ApiClient;

/// Application state shared by the command layer
pub struct AppState {
    config: RwLock<ConfigService>,
    session: Arc<SessionStore>,
    history: Arc<HistoryStore>,
    api: Arc<ApiClient>,
    orchestrator: SummarizeOrchestrator,
    clipboard: Arc<dyn Clipboard>,
}

impl AppState {
    /// Initialize all services against the default storage locations
    pub fn initialize(
        navigator: Arc<dyn Navigator>,
        clipboard: Arc<dyn Clipboard>,
    ) -> AppResult<Self> {
        let config = ConfigService::new()?;
        let session = Arc::new(SessionStore::new()?);
        let history = Arc::new(HistoryStore::new(Box::new(FileHistoryBacking::new()?)));
        let api = Arc::new(ApiClient::new(
            config.get_config().api_config(),
            session.clone(),
        ));
        let orchestrator = SummarizeOrchestrator::new(
            api.clone(),
            api.clone(),
            session.clone(),
            navigator,
            history.clone(),
        );

        Ok(Self {
            config: RwLock::new(config),
            session,
            history,
            api,
            orchestrator,
            clipboard,
        })
    }

    pub fn orchestrator(&self) -> &SummarizeOrchestrator {
        &self.orchestrator
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }

    /// Get the current configuration
    pub async fn get_config(&self) -> AppConfig {
        self.config.read().await.get_config_clone()
    }

    /// Update the configuration with a partial update
    pub async fn update_config(&self, update: SettingsUpdate) -> AppResult<AppConfig> {
        self.config.write().await.update_config(update)
    }
}
