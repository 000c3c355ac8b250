//! CLI command implementations
//!
//! `main` stays a thin entrypoint; loading configuration, opening the
//! catalog, and booting the server all happen here.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
///
/// Every field is defaulted, so an empty object — or a missing file —
/// is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database section
    #[serde(default)]
    pub database: DatabaseConfig,

    /// HTTP server section
    #[serde(default)]
    pub http: HttpServerConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "./cinedb.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?;

        Ok(config)
    }
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Write a default config file if none exists, then create the
/// database and bring it to the latest schema version.
pub fn init(config_path: &Path) -> CliResult<()> {
    if !config_path.exists() {
        let rendered = serde_json::to_string_pretty(&Config::default())?;
        fs::write(config_path, rendered)?;
        println!("Wrote default config to {}", config_path.display());
    }

    let config = Config::load(config_path)?;
    Catalog::open(&config.database.path).map_err(|e| CliError::boot_failed(e.to_string()))?;
    println!("Catalog database ready at {}", config.database.path);

    Ok(())
}

/// Open the catalog and serve HTTP until the process is stopped.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let catalog =
        Catalog::open(&config.database.path).map_err(|e| CliError::boot_failed(e.to_string()))?;
    let server = HttpServer::with_config(Arc::new(catalog), config.http);

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| CliError::boot_failed(e.to_string()))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}
