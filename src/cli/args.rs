//! CLI argument definitions using clap
//!
//! Commands:
//! - sales-validator init --config <path>
//! - sales-validator serve --config <path> [--port <port>]
//! - sales-validator check <file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validator for uploaded sales CSV files
#[derive(Parser, Debug)]
#[command(name = "sales-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config and create the storage container
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./sales-validator.json")]
        config: PathBuf,
    },

    /// Start the HTTP validation service
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./sales-validator.json")]
        config: PathBuf,

        /// Port override (takes precedence over config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a local file and print the JSON response
    Check {
        /// CSV file to validate
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
