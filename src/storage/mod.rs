//! Storage layer
//!
//! Persistence for configuration, the session credential, and the summary
//! history. Everything is a JSON slot under the application directory.

pub mod config;
pub mod history;
pub mod session;

pub use config::ConfigService;
pub use history::{FileHistoryBacking, HistoryBacking, HistoryStore, MemoryHistoryBacking};
pub use session::SessionStore;
