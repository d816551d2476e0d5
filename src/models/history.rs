//! History Models
//!
//! A history entry records one completed summarization round-trip.
//! Entries are immutable after creation except for deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartsum_core::{Granularity, InputMode, SubmissionRequest};

/// One persisted summarization round-trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// The text or URL exactly as the user submitted it
    pub original_input: String,
    pub input_mode: InputMode,
    pub granularity: Granularity,
    pub summary_text: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry for a completed submission
    pub fn new(request: &SubmissionRequest, summary_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_input: request.content.clone(),
            input_mode: request.input_mode,
            granularity: request.granularity,
            summary_text: summary_text.into(),
            created_at: Utc::now(),
        }
    }
}
