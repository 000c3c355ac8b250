//! # HTTP Server
//!
//! Axum routers exposing the catalog over a conventional CRUD
//! interface, one router per resource plus a health endpoint.

pub mod config;
pub mod errors;
pub mod response;

mod director_routes;
mod genre_routes;
mod health_routes;
mod movie_routes;
mod server;

pub use config::HttpServerConfig;
pub use director_routes::director_routes;
pub use errors::{ApiError, ErrorResponse};
pub use genre_routes::genre_routes;
pub use health_routes::health_routes;
pub use movie_routes::movie_routes;
pub use server::HttpServer;
