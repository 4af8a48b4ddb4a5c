//! Fluxgen API Routes
//!
//! - /api/generate - Image generation
//! - /swagger-ui - OpenAPI documentation

pub mod generate;
pub mod swagger;
