//! HistoryEntry - A persisted record of a past generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GenerationResult;

/// One entry in the generation history
///
/// Entries are immutable once created; the history list only ever
/// replaces itself wholesale (prepend, remove-by-id, clear).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique id, assigned at insertion time, never reused
    pub id: Uuid,
    pub image_url: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
    pub model: String,
}

impl HistoryEntry {
    /// Build an entry from a generation result, assigning a fresh id.
    pub fn from_result(result: &GenerationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url: result.image_url.clone(),
            prompt: result.prompt.clone(),
            timestamp: result.timestamp,
            model: result.model.clone(),
        }
    }
}
