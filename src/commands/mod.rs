//! Command layer
//!
//! User-action handlers invoked by the CLI dispatcher. Each handler is a
//! thin delegation into the services, plus terminal output.

pub mod auth;
pub mod history;
pub mod settings;
pub mod summarize;

use smartsum_core::ClassifiedError;

/// Print a classified error with its remedial actions.
///
/// Actions are offered, never executed here.
pub fn print_classified(error: &ClassifiedError) {
    eprintln!("{}: {}", error.title, error.message);
    for action in &error.actions {
        eprintln!("  - {}", action.label());
    }
}
