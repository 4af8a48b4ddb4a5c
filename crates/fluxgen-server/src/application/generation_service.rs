//! Generation Application Service (Use Case)
//!
//! Orchestrates one generation: validate the prompt, compose the fixed
//! two-message conversation, make a single upstream call, extract the
//! image URL. Stateless between calls.

use std::sync::Arc;

use fluxgen::{extract_image_url, ChatMessage, DomainError, GenerationResult, ImageGenProvider};

/// System prompt used when the caller does not supply one
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert AI image generator. Create high-quality, detailed images based on user prompts. Focus on artistic composition, proper lighting, and visual appeal. Generate photorealistic or artistic images as requested.";

/// Literal instruction prefixed to every user prompt
const USER_INSTRUCTION: &str = "Generate an image: ";

/// Application service for image generation
pub struct GenerationService<P: ImageGenProvider> {
    provider: Arc<P>,
    /// Optional prompt length cap (characters); `None` means uncapped
    max_prompt_chars: Option<usize>,
}

impl<P: ImageGenProvider> GenerationService<P> {
    pub fn new(provider: Arc<P>, max_prompt_chars: Option<usize>) -> Self {
        Self {
            provider,
            max_prompt_chars,
        }
    }

    /// Run one generation end to end.
    ///
    /// Exactly one upstream call is made, and only after validation
    /// passes. A result is only ever produced when a URL was extracted.
    pub async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<GenerationResult, DomainError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(DomainError::validation(
                "Prompt is required and must be a non-empty string",
            ));
        }

        if let Some(max) = self.max_prompt_chars {
            if prompt.chars().count() > max {
                return Err(DomainError::validation(format!(
                    "Prompt must be at most {max} characters"
                )));
            }
        }

        let system_prompt = match system_prompt {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        let messages = vec![
            ChatMessage::system(&system_prompt),
            ChatMessage::user(format!("{USER_INSTRUCTION}{prompt}")),
        ];

        let content = self.provider.complete(&messages).await?;

        let image_url = match extract_image_url(&content) {
            Some(url) => url,
            None => {
                tracing::error!("No image URL found in upstream reply: {}", content);
                return Err(DomainError::Extraction);
            }
        };

        tracing::info!(
            "Generated image via {} for prompt ({} chars)",
            self.provider.model_id(),
            prompt.len()
        );

        Ok(GenerationResult::new(
            image_url,
            prompt,
            system_prompt,
            self.provider.model_id(),
        ))
    }
}
