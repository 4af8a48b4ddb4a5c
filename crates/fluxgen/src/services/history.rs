//! Generation History - bounded, newest-first, durably persisted
//!
//! The store owns the in-memory list and treats it as the source of
//! truth for the session. Every mutation rewrites the whole list
//! through the storage port; a storage failure degrades the store to
//! memory-only operation for that call and is logged, never surfaced.

use uuid::Uuid;

use crate::domain::entities::{GenerationResult, HistoryEntry};
use crate::ports::HistoryStorage;

/// Maximum number of entries kept; inserting past the bound evicts the
/// oldest entries.
pub const HISTORY_LIMIT: usize = 20;

/// Bounded history of past generations
pub struct HistoryStore<S: HistoryStorage> {
    entries: Vec<HistoryEntry>,
    storage: S,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Hydrate the store from durable storage.
    ///
    /// An absent blob yields an empty list. A corrupt or unreadable
    /// blob is discarded with a warning, never an error.
    pub fn load(storage: S) -> Self {
        let entries = match storage.read() {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<HistoryEntry>>(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Discarding corrupt history blob: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read history storage: {}", e);
                Vec::new()
            }
        };

        Self { entries, storage }
    }

    /// Record a successful generation at the head of the list,
    /// evicting past the bound, and persist.
    pub fn add(&mut self, result: &GenerationResult) -> HistoryEntry {
        let entry = HistoryEntry::from_result(result);
        self.entries.insert(0, entry.clone());
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();
        entry
    }

    /// Remove the entry with `id`, if present. Removing an unknown id
    /// is a no-op, not an error.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        self.persist();
        removed
    }

    /// Drop all entries and persist the empty list.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Current snapshot, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.entries) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.write(&blob) {
            tracing::warn!("Failed to persist history: {}", e);
        }
    }
}
