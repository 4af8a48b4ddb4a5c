//! Server Configuration
//!
//! All settings come from the environment (with dotenvy loading a local
//! `.env` in development). The upstream endpoint uses fixed static
//! credentials; there is no per-user secret or key rotation.

use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_UPSTREAM_URL: &str = "https://oi-server.onrender.com/chat/completions";
const DEFAULT_CUSTOMER_ID: &str = "cus_S16jfiBUH2cc7P";
const DEFAULT_AUTH_TOKEN: &str = "xxx";
const DEFAULT_MODEL_ID: &str = "replicate/black-forest-labs/flux-1.1-pro";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Upstream chat-completions endpoint
    pub upstream_url: String,
    /// Static `CustomerId` header value for the upstream
    pub customer_id: String,
    /// Static bearer token for the upstream
    pub auth_token: String,
    /// Fixed model identifier sent with every request
    pub model_id: String,
    /// Optional server-side cap on prompt length in characters.
    /// Disabled by default; the upstream imposes no cap of its own.
    pub max_prompt_chars: Option<usize>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("FLUXGEN_BIND_ADDR", DEFAULT_BIND_ADDR),
            upstream_url: env_or("FLUXGEN_UPSTREAM_URL", DEFAULT_UPSTREAM_URL),
            customer_id: env_or("FLUXGEN_CUSTOMER_ID", DEFAULT_CUSTOMER_ID),
            auth_token: env_or("FLUXGEN_AUTH_TOKEN", DEFAULT_AUTH_TOKEN),
            model_id: env_or("FLUXGEN_MODEL_ID", DEFAULT_MODEL_ID),
            max_prompt_chars: env::var("FLUXGEN_MAX_PROMPT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
