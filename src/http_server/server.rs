//! # HTTP Server
//!
//! Combines the health and clips routers behind a CORS layer.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::clips_routes::{clips_routes, ClipsState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::clips::ClipsConfig;
use crate::observability::Logger;

/// HTTP server for the clips gateway
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, clips: &ClipsConfig) -> Self {
        let router = Self::build_router(&config, clips);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, clips: &ClipsConfig) -> Router {
        let clips_state = Arc::new(ClipsState::new(clips));

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
            .nest("/clips", clips_routes(clips_state))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;

        Logger::info("HTTP_SERVER_STARTING", &[("addr", &addr)]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clips() -> ClipsConfig {
        ClipsConfig::new("/opt/rete/", "/var/clips/", "/var/out/")
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(
            HttpServerConfig {
                port: 9000,
                ..Default::default()
            },
            &clips(),
        );
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:4200".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, &clips()).router();
    }
}
