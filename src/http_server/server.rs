//! # HTTP Server
//!
//! Main HTTP server combining the health and validation routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::validate_routes::{validate_routes, ValidateState};
use crate::observability::{log_event, Event};

/// HTTP server for the sales validator
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given validation state
    pub fn new(config: HttpServerConfig, state: ValidateState) -> Self {
        let router = Self::build_router(&config, Arc::new(state));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<ValidateState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/api", validate_routes(state))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event(
            Event::ServerStart,
            &format!("listening on http://{} (POST/GET /api/validate, GET /health)", addr),
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStop, "server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed.
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state(temp: &TempDir) -> ValidateState {
        ValidateState::new(temp.path(), "sales-files", 1024)
    }

    #[test]
    fn test_server_creation() {
        let temp = TempDir::new().unwrap();
        let server = HttpServer::new(HttpServerConfig::default(), state(&temp));
        assert_eq!(server.socket_addr(), "0.0.0.0:7071");
    }

    #[test]
    fn test_server_with_custom_port() {
        let temp = TempDir::new().unwrap();
        let server = HttpServer::new(HttpServerConfig::with_port(8080), state(&temp));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let temp = TempDir::new().unwrap();
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, state(&temp)).router();
    }

    #[tokio::test]
    async fn test_start_rejects_bad_address() {
        let temp = TempDir::new().unwrap();
        let config = HttpServerConfig {
            host: "not an address".to_string(),
            ..Default::default()
        };
        let err = HttpServer::new(config, state(&temp)).start().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
