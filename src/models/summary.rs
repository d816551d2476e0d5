//! Summary View Model
//!
//! The active result view: the input that produced a summary, the summary
//! itself, and the character statistics shown alongside text summaries.

use serde::{Deserialize, Serialize};

use crate::models::history::HistoryEntry;
use smartsum_core::{Granularity, InputMode, SubmissionRequest, SummaryResult};

/// The currently displayed (input, result) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub original_input: String,
    pub input_mode: InputMode,
    pub granularity: Granularity,
    pub summary: SummaryResult,
}

impl SummaryView {
    pub fn new(request: &SubmissionRequest, summary: SummaryResult) -> Self {
        Self {
            original_input: request.content.clone(),
            input_mode: request.input_mode,
            granularity: request.granularity,
            summary,
        }
    }

    /// Rebuild the view from a selected history entry
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            original_input: entry.original_input.clone(),
            input_mode: entry.input_mode,
            granularity: entry.granularity,
            summary: SummaryResult::new(entry.summary_text.clone()),
        }
    }

    pub fn original_chars(&self) -> usize {
        self.original_input.chars().count()
    }

    pub fn summary_chars(&self) -> usize {
        self.summary.text.chars().count()
    }

    /// Percentage by which the summary shrank the original.
    ///
    /// Only meaningful for text submissions with non-empty input and
    /// output; URL submissions have no local original to compare against.
    pub fn reduction_percent(&self) -> Option<i64> {
        if self.input_mode != InputMode::Text {
            return None;
        }
        let original = self.original_chars();
        let summary = self.summary_chars();
        if original == 0 || summary == 0 {
            return None;
        }
        Some((100.0 * (1.0 - summary as f64 / original as f64)).round() as i64)
    }
}
