//! History Storage Port
//!
//! Abstract interface for the history's durable persistence.
//!
//! The contract is deliberately minimal: one JSON blob under one fixed
//! slot, read and written synchronously. Adapters decide what backs the
//! slot (a file, an embedded key-value store, a platform local-storage
//! analogue).

use crate::domain::errors::DomainError;

/// Single-slot blob storage for the serialized history list
pub trait HistoryStorage: Send + Sync {
    /// Read the stored blob, `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>, DomainError>;

    /// Replace the stored blob with `value`.
    fn write(&self, value: &str) -> Result<(), DomainError>;
}
