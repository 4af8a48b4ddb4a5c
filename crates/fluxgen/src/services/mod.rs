//! Domain Services
//!
//! Stateful domain logic built on the ports.

pub mod history;

pub use history::*;
