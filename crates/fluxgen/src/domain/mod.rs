//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, the URL extraction policy, and errors.

pub mod entities;
pub mod errors;
pub mod extract;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use extract::*;
