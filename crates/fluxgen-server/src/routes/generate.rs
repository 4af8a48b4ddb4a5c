//! Generate Route - The Generation Gateway endpoint

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use fluxgen::DomainError;

use crate::models::{ErrorResponse, GenerateImageRequest, GenerateImageResponse};
use crate::AppState;

/// Generate an image from a text prompt
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, description = "Image generated", body = GenerateImageResponse),
        (status = 400, description = "Invalid prompt", body = ErrorResponse),
        (status = 500, description = "Extraction or internal failure", body = ErrorResponse)
    ),
    tag = "Generate"
)]
pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<Json<GenerateImageResponse>, (StatusCode, Json<ErrorResponse>)> {
    // A body that does not parse as JSON still gets the gateway's
    // error envelope, not the framework's plain-text rejection.
    let Json(payload) = payload.map_err(|rejection| {
        error_response(DomainError::ExternalService(format!(
            "Malformed request body: {rejection}"
        )))
    })?;

    let result = state
        .generation
        .generate(payload.prompt_text(), payload.system_prompt.as_deref())
        .await
        .map_err(error_response)?;

    Ok(Json(result.into()))
}

/// Map a domain error to the gateway's wire contract.
///
/// Upstream statuses are mirrored; unexpected failures collapse to a
/// generic 500 with the detail logged, never leaked.
fn error_response(err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err {
        DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        DomainError::Upstream { status, message } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            format!("Image generation failed: {message}"),
        ),
        DomainError::Extraction => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate image - no valid image URL received".to_string(),
        ),
        DomainError::ExternalService(detail) | DomainError::Storage(detail) => {
            tracing::error!("Image generation error: {}", detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error during image generation".to_string(),
            )
        }
    };

    (status, Json(ErrorResponse { error: message }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate_image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::ChatCompletionsProvider;
    use crate::application::GenerationService;
    use crate::config::ServerConfig;

    /// Stand-in upstream that always answers with a fixed status/body.
    async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/chat/completions",
            post(move || async move {
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/chat/completions")
    }

    fn app(upstream_url: String) -> Router {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            upstream_url,
            customer_id: "cus_test".to_string(),
            auth_token: "test-token".to_string(),
            model_id: "replicate/black-forest-labs/flux-1.1-pro".to_string(),
            max_prompt_chars: None,
        };
        let provider = Arc::new(ChatCompletionsProvider::new(&config));
        let state = AppState {
            generation: Arc::new(GenerationService::new(provider, config.max_prompt_chars)),
        };
        router().with_state(state)
    }

    async fn post_generate(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_prompt_is_a_400_without_touching_upstream() {
        // Unroutable upstream: reaching it would fail the test with a
        // 500 instead of the expected 400.
        let app = app("http://127.0.0.1:1/chat/completions".to_string());
        let (status, body) = post_generate(app, "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Prompt is required and must be a non-empty string"
        );
    }

    #[tokio::test]
    async fn non_text_prompt_is_a_400() {
        let app = app("http://127.0.0.1:1/chat/completions".to_string());
        let (status, body) = post_generate(app, r#"{"prompt": 42}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Prompt is required and must be a non-empty string"
        );
    }

    #[tokio::test]
    async fn successful_generation_returns_the_extracted_url() {
        let upstream = spawn_upstream(
            StatusCode::OK,
            r#"{"choices":[{"message":{"content":"Here: https://cdn.example.com/img123.png enjoy"}}]}"#,
        )
        .await;
        let app = app(upstream);

        let (status, body) = post_generate(app, r#"{"prompt":"a red fox in snow"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["imageUrl"], "https://cdn.example.com/img123.png");
        assert_eq!(body["prompt"], "a red fox in snow");
        assert_eq!(body["model"], "replicate/black-forest-labs/flux-1.1-pro");
        assert!(body["timestamp"].is_string());
        assert!(body["systemPrompt"].as_str().unwrap().starts_with("You are an expert"));
    }

    #[tokio::test]
    async fn upstream_failure_status_is_mirrored() {
        let upstream = spawn_upstream(StatusCode::NOT_FOUND, r#"{"detail":"no such model"}"#).await;
        let app = app(upstream);

        let (status, body) = post_generate(app, r#"{"prompt":"a boat"}"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Image generation failed: Not Found");
    }

    #[tokio::test]
    async fn reply_without_url_is_a_500_extraction_failure() {
        let upstream = spawn_upstream(
            StatusCode::OK,
            r#"{"choices":[{"message":{"content":"I cannot draw that."}}]}"#,
        )
        .await;
        let app = app(upstream);

        let (status, body) = post_generate(app, r#"{"prompt":"a boat"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Failed to generate image - no valid image URL received"
        );
    }

    #[tokio::test]
    async fn unparseable_request_body_gets_the_json_error_envelope() {
        let app = app("http://127.0.0.1:1/chat/completions".to_string());
        let (status, body) = post_generate(app, "not json at all").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Internal server error during image generation"
        );
    }

    #[tokio::test]
    async fn non_string_system_prompt_gets_the_json_error_envelope() {
        let app = app("http://127.0.0.1:1/chat/completions".to_string());
        let (status, body) =
            post_generate(app, r#"{"prompt":"a boat","systemPrompt":42}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Internal server error during image generation"
        );
    }

    #[tokio::test]
    async fn malformed_upstream_body_is_a_generic_500() {
        let upstream = spawn_upstream(StatusCode::OK, "not json at all").await;
        let app = app(upstream);

        let (status, body) = post_generate(app, r#"{"prompt":"a boat"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Internal server error during image generation"
        );
    }
}
