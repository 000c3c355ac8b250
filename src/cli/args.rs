//! CLI argument definitions using clap
//!
//! Commands:
//! - cinedb init --config <path>
//! - cinedb serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cinedb - a small, self-hostable movie catalog service
#[derive(Parser, Debug)]
#[command(name = "cinedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file and create the catalog database
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./cinedb.json")]
        config: PathBuf,
    },

    /// Start the catalog HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./cinedb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
