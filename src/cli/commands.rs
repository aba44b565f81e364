//! CLI command implementations

use std::fs;
use std::path::Path;

use serde_json::json;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use crate::http_server::{HttpServer, ValidateState};
use crate::observability::{init_logging, log_event, Event};
use crate::validation::{validate, ValidationVerdict};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { file } => check(&file),
    }
}

/// Write a default config (if absent) and create the storage container.
///
/// An existing config file is loaded, never overwritten.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(config_path, content).map_err(|e| {
            CliError::config_error(format!(
                "Failed to write config {}: {}",
                config_path.display(),
                e
            ))
        })?;
        config
    };

    let container_dir = config.container_dir();
    fs::create_dir_all(&container_dir).map_err(|e| {
        CliError::config_error(format!(
            "Failed to create directory {}: {}",
            container_dir.display(),
            e
        ))
    })?;

    write_json(&json!({
        "initialized": true,
        "config": config_path.display().to_string(),
        "container_dir": container_dir.display().to_string(),
    }))
}

/// Start the HTTP service
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("{}", e);
    }
    log_event(
        Event::ConfigLoaded,
        &format!(
            "container {} under {}",
            config.container,
            config.storage_root.display()
        ),
    );

    fs::create_dir_all(config.container_dir()).map_err(|e| {
        CliError::serve_failed(format!(
            "Failed to create directory {}: {}",
            config.container_dir().display(),
            e
        ))
    })?;

    let state = ValidateState::new(
        &config.storage_root,
        &config.container,
        config.max_upload_bytes,
    );
    let server = HttpServer::new(config.http.clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a local file and print the JSON response.
///
/// A failed verdict is returned as an error so the process exits non-zero.
pub fn check(file: &Path) -> CliResult<()> {
    let data = fs::read(file)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", file.display(), e)))?;

    let verdict = validate(&data);
    write_json(&verdict.to_response())?;

    match verdict {
        ValidationVerdict::Passed { .. } => Ok(()),
        ValidationVerdict::Failed { reason, message } => Err(CliError::validation_failed(
            format!("{} ({})", message, reason),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config_and_container() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("sales-validator.json");
        let storage_root = temp.path().join("data");

        let config = Config {
            storage_root: storage_root.clone(),
            ..Default::default()
        };
        fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

        init(&config_path).unwrap();
        assert!(storage_root.join("sales-files").is_dir());

        // Existing config is left untouched
        let reloaded: Config =
            serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
        assert_eq!(reloaded.storage_root, storage_root);
    }

    #[test]
    fn test_check_passing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("ok.csv");
        fs::write(&file, "TransactionID,ProductName,Amount\n1,Widget,10.50\n").unwrap();

        assert!(check(&file).is_ok());
    }

    #[test]
    fn test_check_failing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.csv");
        fs::write(&file, "TransactionID,ProductName,Amount\n1,Widget,abc\n").unwrap();

        let err = check(&file).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ValidationFailed);
        assert!(err.message().contains("Invalid amount format"));
    }

    #[test]
    fn test_check_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = check(&temp.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
    }
}
