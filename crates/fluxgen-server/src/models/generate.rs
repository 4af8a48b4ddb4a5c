//! Generation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fluxgen::GenerationResult;

/// Request to generate an image
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    /// Text description of the desired image.
    ///
    /// Kept as a raw JSON value so a missing or non-string prompt is
    /// rejected by the gateway's own validation (400) instead of the
    /// framework's deserialization rejection.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub prompt: Option<serde_json::Value>,
    /// Overrides the default instructional system prompt
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl GenerateImageRequest {
    /// The prompt as text, or an empty string when absent or not text.
    pub fn prompt_text(&self) -> &str {
        self.prompt
            .as_ref()
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}

/// Successful generation response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    /// Absolute URL of the generated image
    pub image_url: String,
    /// Echo of the trimmed prompt
    pub prompt: String,
    /// Echo of the system prompt actually used
    pub system_prompt: String,
    /// Upstream model identifier
    pub model: String,
    /// When the gateway produced the result
    pub timestamp: DateTime<Utc>,
}

impl From<GenerationResult> for GenerateImageResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            image_url: result.image_url,
            prompt: result.prompt,
            system_prompt: result.system_prompt,
            model: result.model,
            timestamp: result.timestamp,
        }
    }
}

/// Error envelope returned on every failure path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
