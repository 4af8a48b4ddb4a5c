use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::ChatCompletionsProvider;
use application::GenerationService;
use config::ServerConfig;
use routes::swagger::ApiDoc;

/// Type alias for the generation service with the concrete upstream adapter
pub type AppGenerationService = GenerationService<ChatCompletionsProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub generation: Arc<AppGenerationService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Fluxgen gateway is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Fluxgen gateway initializing...");

    let config = ServerConfig::from_env();
    let provider = Arc::new(ChatCompletionsProvider::new(&config));
    let generation = Arc::new(GenerationService::new(provider, config.max_prompt_chars));
    let state = AppState { generation };

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::generate::router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Fluxgen gateway listening on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
