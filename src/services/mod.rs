//! Business logic services

pub mod classifier;
pub mod clipboard;
pub mod orchestrator;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use orchestrator::{Navigator, SubmitOutcome, SubmitPhase, SummarizeOrchestrator};
