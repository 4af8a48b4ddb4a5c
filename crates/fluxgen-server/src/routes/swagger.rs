//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, GenerateImageRequest, GenerateImageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::generate::generate_image,
    ),
    info(
        title = "Fluxgen API",
        version = "0.1.0",
        description = "Generation Gateway - proxies text prompts to an upstream image model and returns the extracted image URL.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Generate", description = "Image generation via the upstream chat-completions model"),
    ),
    components(
        schemas(
            GenerateImageRequest,
            GenerateImageResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
