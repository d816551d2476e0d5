//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

use smartsum_api::ApiConfig;
use smartsum_core::Granularity;

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend base URL
    pub api_base_url: String,
    /// Bound on the URL content resolution call, in seconds
    pub fetch_timeout_secs: u64,
    /// Bound on the summarization call, in seconds
    pub summarize_timeout_secs: u64,
    /// Granularity used when none is given on the command line
    #[serde(default)]
    pub default_granularity: Granularity,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: smartsum_api::DEFAULT_BASE_URL.to_string(),
            fetch_timeout_secs: 20,
            summarize_timeout_secs: 20,
            default_granularity: Granularity::Standard,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_base_url: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
    pub summarize_timeout_secs: Option<u64>,
    pub default_granularity: Option<Granularity>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(base_url) = update.api_base_url {
            self.api_base_url = base_url;
        }
        if let Some(secs) = update.fetch_timeout_secs {
            self.fetch_timeout_secs = secs;
        }
        if let Some(secs) = update.summarize_timeout_secs {
            self.summarize_timeout_secs = secs;
        }
        if let Some(granularity) = update.default_granularity {
            self.default_granularity = granularity;
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), String> {
        let parsed = url::Url::parse(&self.api_base_url)
            .map_err(|e| format!("api_base_url is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err("api_base_url must use http or https".to_string());
        }
        for (name, secs) in [
            ("fetch_timeout_secs", self.fetch_timeout_secs),
            ("summarize_timeout_secs", self.summarize_timeout_secs),
        ] {
            if !(1..=120).contains(&secs) {
                return Err(format!("{} must be between 1 and 120", name));
            }
        }
        Ok(())
    }

    /// Derive the API client configuration
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            fetch_timeout: std::time::Duration::from_secs(self.fetch_timeout_secs),
            summarize_timeout: std::time::Duration::from_secs(self.summarize_timeout_secs),
        }
    }
}
