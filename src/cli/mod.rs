//! # CLI
//!
//! Command-line interface for the catalog service:
//! - init: write a default config and create the database
//! - serve: boot the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve, Config, DatabaseConfig};
pub use errors::{CliError, CliResult};
