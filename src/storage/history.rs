//! History Cache
//!
//! A bounded, order-preserving store of past summarization round-trips,
//! most-recent-first, persisted as one JSON slot. The backing is injected
//! so tests substitute an in-memory slot for the file.
//!
//! Invariants: the sequence never exceeds [`HISTORY_CAPACITY`] entries,
//! and the persisted representation equals the in-memory sequence after
//! every mutating operation.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use tracing::warn;
use uuid::Uuid;

use crate::models::history::HistoryEntry;
use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_smartsum_dir, history_path};

/// Maximum number of retained entries
pub const HISTORY_CAPACITY: usize = 10;

/// Persistence seam for the history slot.
///
/// `load` returns `None` when the slot is absent or unreadable; startup
/// must tolerate both.
pub trait HistoryBacking: Send + Sync {
    fn load(&self) -> Option<Vec<HistoryEntry>>;
    fn save(&self, entries: &[HistoryEntry]) -> AppResult<()>;
    /// Remove the persisted slot entirely
    fn clear(&self) -> AppResult<()>;
}

/// History slot stored as a JSON file
#[derive(Debug)]
pub struct FileHistoryBacking {
    path: PathBuf,
}

impl FileHistoryBacking {
    /// Backing at the default location
    pub fn new() -> AppResult<Self> {
        ensure_smartsum_dir()?;
        Ok(Self {
            path: history_path()?,
        })
    }

    /// Backing at an explicit file path
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HistoryBacking for FileHistoryBacking {
    fn load(&self) -> Option<Vec<HistoryEntry>> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!(error = %e, "history slot is malformed, starting empty");
                None
            }
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> AppResult<()> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory history slot, used by tests and available as a substitution
/// point for alternative frontends
#[derive(Debug, Default)]
pub struct MemoryHistoryBacking {
    slot: Mutex<Option<Vec<HistoryEntry>>>,
}

impl MemoryHistoryBacking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slot currently holds a persisted sequence
    pub fn has_slot(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl HistoryBacking for MemoryHistoryBacking {
    fn load(&self) -> Option<Vec<HistoryEntry>> {
        self.slot.lock().ok()?.clone()
    }

    fn save(&self, entries: &[HistoryEntry]) -> AppResult<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(entries.to_vec());
        }
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// Bounded, persisted store of past summarization results
pub struct HistoryStore {
    backing: Box<dyn HistoryBacking>,
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryStore {
    /// Create a store over the given backing, loading any persisted slot.
    ///
    /// An absent or malformed slot initializes to empty. A slot that
    /// somehow grew past capacity is truncated on load.
    pub fn new(backing: Box<dyn HistoryBacking>) -> Self {
        let mut entries = backing.load().unwrap_or_default();
        entries.truncate(HISTORY_CAPACITY);
        Self {
            backing,
            entries: RwLock::new(entries),
        }
    }

    /// Prepend an entry, evicting the oldest past capacity, and persist
    pub fn insert(&self, entry: HistoryEntry) -> AppResult<()> {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            entries.insert(0, entry);
            entries.truncate(HISTORY_CAPACITY);
            entries.clone()
        };
        self.backing.save(&snapshot)
    }

    /// Remove the entry with the given id; no-op when absent
    pub fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let before = entries.len();
            entries.retain(|entry| entry.id != *id);
            if entries.len() == before {
                return Ok(false);
            }
            entries.clone()
        };
        self.backing.save(&snapshot)?;
        Ok(true)
    }

    /// Empty the store and remove the persisted slot entirely
    pub fn clear(&self) -> AppResult<()> {
        {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            entries.clear();
        }
        self.backing.clear()
    }

    /// Snapshot of the entries, most-recent-first
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Look up an entry by id
    pub fn get(&self, id: &Uuid) -> Option<HistoryEntry> {
        self.entries
            .read()
            .ok()?
            .iter()
            .find(|entry| entry.id == *id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
