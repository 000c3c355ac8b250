//! # HTTP Server
//!
//! Combined router and serving loop for the catalog API.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::Catalog;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::director_routes::director_routes;
use super::genre_routes::genre_routes;
use super::health_routes::health_routes;
use super::movie_routes::movie_routes;

/// HTTP server for the catalog API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, HttpServerConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(catalog: Arc<Catalog>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(catalog, &config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(catalog: Arc<Catalog>, config: &HttpServerConfig) -> Router {
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
            .nest("/movies", movie_routes(catalog.clone()))
            .nest("/directors", director_routes(catalog.clone()))
            .nest("/genres", genre_routes(catalog))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("HTTP_SERVE", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
