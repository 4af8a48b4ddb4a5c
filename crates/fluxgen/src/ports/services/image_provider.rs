//! Image Generation Provider Port
//!
//! Abstract interface for the upstream image-generation collaborator.
//! The upstream speaks a chat-completions dialect: it accepts a short
//! conversation and answers with free-form text that (hopefully)
//! contains an image URL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Upstream image generation interface
///
/// One call per generation: no retry, no streaming, no cancellation.
/// Implementations map transport failures to `DomainError::ExternalService`
/// and non-success upstream statuses to `DomainError::Upstream`.
#[async_trait]
pub trait ImageGenProvider: Send + Sync {
    /// Send the conversation upstream and return the raw textual
    /// content of the first reply choice.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
