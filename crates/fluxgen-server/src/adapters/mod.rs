//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

mod chat_completions;

pub use chat_completions::*;
