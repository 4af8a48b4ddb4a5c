//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - GenerationResult: one successful image generation
//! - HistoryEntry: a persisted record of a past generation

mod generation;
mod history;

pub use generation::*;
pub use history::*;
