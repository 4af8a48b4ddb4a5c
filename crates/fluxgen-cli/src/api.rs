//! Fluxgen Gateway API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Serialize;

use fluxgen::GenerationResult;

/// API client for the Generation Gateway
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_prompt: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl GatewayClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Submit a prompt and wait for the generated image URL.
    ///
    /// Non-success responses surface the gateway's `error` message
    /// verbatim; no automatic retry is attempted.
    pub async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<GenerationResult> {
        let url = format!("{}/api/generate", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                prompt,
                system_prompt,
            })
            .send()
            .await
            .context("Failed to connect to Fluxgen gateway")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            bail!("{message}");
        }

        let result: GenerationResult = resp.json().await.context("Failed to parse response")?;

        Ok(result)
    }
}
