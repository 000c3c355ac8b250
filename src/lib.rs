//! cinedb - a small, self-hostable movie catalog service
//!
//! CRUD HTTP interface over three related entities — movies,
//! directors, and genres — backed by SQLite.

pub mod catalog;
pub mod cli;
pub mod db;
pub mod http_server;
pub mod observability;
