//! History Commands
//!
//! List, show, delete, and clear past summaries.

use crate::commands::summarize::copy_to_clipboard;
use crate::models::history::HistoryEntry;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Longest original-input preview shown in the list
const PREVIEW_MAX_LEN: usize = 60;

/// Print all retained entries, most recent first
pub async fn list(state: &AppState) -> AppResult<()> {
    let entries = state.history().entries();
    if entries.is_empty() {
        println!("No summaries yet.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {}  [{} / {}]  {}",
            short_id(entry),
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.input_mode.label(),
            entry.granularity.label(),
            preview(&entry.original_input)
        );
    }
    Ok(())
}

/// Restore an entry into the active view and print it in full
pub async fn show(state: &AppState, id: &str, copy: bool) -> AppResult<()> {
    let entry = find_entry(state, id)?;
    state.orchestrator().restore(&entry).await;

    println!("Input ({}):", entry.input_mode.label());
    println!("{}", preview(&entry.original_input));
    println!();
    println!("Summary ({}):", entry.granularity.label());
    println!("{}", entry.summary_text);
    if copy {
        copy_to_clipboard(state, &entry.summary_text);
    }
    Ok(())
}

/// Delete one entry by id
pub async fn delete(state: &AppState, id: &str) -> AppResult<()> {
    let entry = find_entry(state, id)?;
    state.history().delete(&entry.id)?;
    println!("Deleted {}.", short_id(&entry));
    Ok(())
}

/// Delete all entries
pub async fn clear(state: &AppState) -> AppResult<()> {
    state.history().clear()?;
    println!("History cleared.");
    Ok(())
}

/// Match an entry by full id or unambiguous prefix
fn find_entry(state: &AppState, id: &str) -> AppResult<HistoryEntry> {
    let entries = state.history().entries();
    let mut matches = entries
        .iter()
        .filter(|entry| entry.id.to_string().starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.clone()),
        (Some(_), Some(_)) => Err(AppError::validation(format!(
            "id prefix '{}' is ambiguous",
            id
        ))),
        (None, _) => Err(AppError::not_found(format!("history entry '{}'", id))),
    }
}

fn short_id(entry: &HistoryEntry) -> String {
    entry.id.to_string()[..8].to_string()
}

fn preview(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > PREVIEW_MAX_LEN {
        format!("{}...", chars[..PREVIEW_MAX_LEN].iter().collect::<String>())
    } else {
        text.to_string()
    }
}
