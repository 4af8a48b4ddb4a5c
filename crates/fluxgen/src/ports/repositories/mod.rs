//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod history_storage;

pub use history_storage::*;
