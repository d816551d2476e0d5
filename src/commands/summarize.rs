//! Summarize Command
//!
//! Runs one submission through the orchestrator and renders the outcome.

use crate::commands::print_classified;
use crate::models::summary::SummaryView;
use crate::services::classifier;
use crate::services::orchestrator::SubmitOutcome;
use crate::state::AppState;
use crate::utils::error::AppResult;
use smartsum_core::{Granularity, InputMode, SubmissionRequest};

/// Text offered by the "try sample text" remedy
pub const SAMPLE_TEXT: &str = "The printing press, invented by Johannes Gutenberg around 1440, \
transformed the spread of knowledge across Europe. Before movable type, books were copied by \
hand, making them rare and expensive. Within decades of the invention, printed books became \
affordable to merchants and scholars alike, literacy rates climbed, and new ideas travelled \
faster than any authority could contain them.";

/// Submit content and print the resulting summary or classified error
pub async fn run(
    state: &AppState,
    content: String,
    input_mode: InputMode,
    granularity: Granularity,
    copy: bool,
) -> AppResult<()> {
    let request = SubmissionRequest::new(content, input_mode, granularity);
    match state.orchestrator().submit(request).await {
        SubmitOutcome::Success(entry) => {
            let view = SummaryView::from_entry(&entry);
            print_summary(&view);
            if copy {
                copy_to_clipboard(state, &entry.summary_text);
            }
        }
        SubmitOutcome::Failed(error) => print_classified(&error),
        SubmitOutcome::Superseded => {}
    }
    Ok(())
}

fn print_summary(view: &SummaryView) {
    println!(
        "{} summary ({}):",
        view.granularity.label(),
        view.granularity.description()
    );
    println!();
    println!("{}", view.summary.text);
    if let Some(reduction) = view.reduction_percent() {
        println!();
        println!(
            "Original: {} chars | Summary: {} chars | Reduction: {}%",
            view.original_chars(),
            view.summary_chars(),
            reduction
        );
    }
}

pub(crate) fn copy_to_clipboard(state: &AppState, text: &str) {
    match state.clipboard().write(text) {
        Ok(()) => println!("Copied to clipboard."),
        Err(_) => print_classified(&classifier::clipboard_failure()),
    }
}
