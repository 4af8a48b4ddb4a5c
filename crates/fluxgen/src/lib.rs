//! Fluxgen Domain Library
//!
//! Core domain types and interfaces for the Fluxgen image generation
//! gateway and its history store.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (GenerationResult, HistoryEntry)
//!   - `extract`: The image URL extraction policy as a pure function
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: History persistence interface
//!   - `services/`: Upstream image generation provider interface
//!
//! - **Services** (`services/`): Domain services
//!   - `history`: The bounded, newest-first generation history
//!
//! # Usage
//!
//! ```rust,ignore
//! use fluxgen::{extract_image_url, GenerationResult, HistoryStore};
//! use fluxgen::ports::{HistoryStorage, ImageGenProvider};
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{extract_image_url, DomainError, GenerationResult, HistoryEntry};
pub use ports::{ChatMessage, HistoryStorage, ImageGenProvider, MessageRole};
pub use services::{HistoryStore, HISTORY_LIMIT};
