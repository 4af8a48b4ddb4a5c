//! Chat Completions Adapter
//!
//! Implements `ImageGenProvider` against the upstream chat-completions
//! endpoint using reqwest. Exactly one attempt per call; no retry and
//! no timeout beyond what the network layer imposes.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use fluxgen::{ChatMessage, DomainError, ImageGenProvider};

use crate::config::ServerConfig;

/// HTTP client for the upstream image generation model
pub struct ChatCompletionsProvider {
    client: Client,
    endpoint: String,
    customer_id: String,
    auth_token: String,
    model_id: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    /// Free-form reply content. Kept as a raw value: a non-text reply
    /// means no URL was received, not a transport failure.
    #[serde(default)]
    content: serde_json::Value,
}

impl ChatCompletionsProvider {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.upstream_url.clone(),
            customer_id: config.customer_id.clone(),
            auth_token: config.auth_token.clone(),
            model_id: config.model_id.clone(),
        }
    }
}

#[async_trait]
impl ImageGenProvider for ChatCompletionsProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let request = CompletionRequest {
            model: &self.model_id,
            messages,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("CustomerId", &self.customer_id)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Upstream request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            // Raw upstream body is diagnostic only, never returned.
            tracing::error!("Upstream API error {}: {}", status, error_text);
            return Err(DomainError::upstream(
                status.as_u16(),
                status.canonical_reason().unwrap_or("upstream failure"),
            ));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Malformed upstream response: {e}"))
        })?;

        // A reply without choices or with non-text content carries no
        // URL; the extraction step downstream reports that as such.
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content.as_str().map(str::to_string))
            .unwrap_or_default();

        Ok(content)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
