//! Service Ports
//!
//! Abstract interfaces for external services.

mod image_provider;

pub use image_provider::*;
