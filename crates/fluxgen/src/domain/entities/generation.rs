//! GenerationResult - The outcome of one successful image generation
//!
//! A result only exists once an image URL has been extracted from the
//! upstream reply; there is no "success without a URL" state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed image generation
///
/// Wire field names are camelCase to match the gateway's JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Absolute URL of the generated image
    pub image_url: String,
    /// The trimmed prompt the user submitted
    pub prompt: String,
    /// The system prompt actually sent upstream (caller-provided or default)
    pub system_prompt: String,
    /// Identifier of the upstream model that produced the image
    pub model: String,
    /// When the gateway produced this result
    pub timestamp: DateTime<Utc>,
}

impl GenerationResult {
    /// Create a result stamped with the current time.
    ///
    /// `image_url` must already have passed the extraction policy.
    pub fn new(
        image_url: impl Into<String>,
        prompt: impl Into<String>,
        system_prompt: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            prompt: prompt.into(),
            system_prompt: system_prompt.into(),
            model: model.into(),
            timestamp: Utc::now(),
        }
    }
}
