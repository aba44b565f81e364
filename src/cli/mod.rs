//! CLI module
//!
//! Provides command-line interface for:
//! - init: Write a default config and create the storage container
//! - serve: Run the HTTP validation service
//! - check: Validate a single local file

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
