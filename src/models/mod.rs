//! Data models

pub mod history;
pub mod settings;
pub mod summary;

pub use history::HistoryEntry;
pub use settings::{AppConfig, SettingsUpdate};
pub use summary::SummaryView;
