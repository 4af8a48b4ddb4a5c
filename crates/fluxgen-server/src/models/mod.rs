//! Gateway Data Models
//!
//! Request/response DTOs for the HTTP surface.

mod generate;

pub use generate::*;
