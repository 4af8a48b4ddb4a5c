//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The upstream model endpoint answered with a non-success status.
    /// The status is mirrored to the gateway caller; the raw body is
    /// logged at the call site, never returned.
    #[error("Image generation failed: {message}")]
    Upstream { status: u16, message: String },

    /// The upstream call succeeded but no image URL could be extracted
    /// from the reply content.
    #[error("Failed to generate image - no valid image URL received")]
    Extraction,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}
