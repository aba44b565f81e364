//! # HTTP Server Module
//!
//! Axum server exposing the validator over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/validate` - Validate a stored file (`?fileName=`) or the request body
//! - `/api/validate/upload` - Validate a multipart file upload

pub mod config;
pub mod health_routes;
pub mod server;
pub mod validate_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use validate_routes::ValidateState;
