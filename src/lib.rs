//! SmartSum - Rust Client Library
//!
//! Backend functionality for the SmartSum client:
//! - Command handlers driven by the CLI
//! - The submission orchestrator and error classifier
//! - Storage layer (config, session, history)
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::settings::{AppConfig, SettingsUpdate};
pub use models::{HistoryEntry, SummaryView};
pub use services::{Navigator, SubmitOutcome, SubmitPhase, SummarizeOrchestrator};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
