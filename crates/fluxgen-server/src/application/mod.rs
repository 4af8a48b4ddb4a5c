//! Application Services (Use Cases)

mod generation_service;

pub use generation_service::*;
