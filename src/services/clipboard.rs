//! Clipboard Service
//!
//! Copies summary text to the system clipboard by piping it to the
//! platform's clipboard utility. Failures here are local-environment
//! failures and are classified as such, never as network failures.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::utils::error::{AppError, AppResult};

/// Destination for copied summary text
pub trait Clipboard: Send + Sync {
    fn write(&self, text: &str) -> AppResult<()>;
}

/// Clipboard commands tried in order on macOS
static MACOS_TOOLS: &[&[&str]] = &[&["pbcopy"]];

/// Clipboard commands tried in order elsewhere
static UNIX_TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Clipboard backed by the platform's clipboard utility
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> &'static [&'static [&'static str]] {
        if cfg!(target_os = "macos") {
            MACOS_TOOLS
        } else {
            UNIX_TOOLS
        }
    }

    fn pipe_to(command: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(command[0])
            .args(&command[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }
}

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> AppResult<()> {
        for command in Self::candidates() {
            match Self::pipe_to(command, text) {
                Ok(true) => {
                    debug!(tool = command[0], "copied to clipboard");
                    return Ok(());
                }
                Ok(false) => {
                    return Err(AppError::clipboard(format!(
                        "{} exited with a failure status",
                        command[0]
                    )))
                }
                // Tool not installed; try the next one
                Err(_) => continue,
            }
        }
        Err(AppError::clipboard("no clipboard utility available"))
    }
}

/// Clipboard that records writes in memory, for tests
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: std::sync::Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.writes
            .lock()
            .ok()
            .and_then(|writes| writes.last().cloned())
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, text: &str) -> AppResult<()> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}
