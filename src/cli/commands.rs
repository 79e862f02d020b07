//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Configuration resolve (file + flags)
//! 2. Catalog load from the data file
//! 3. HTTP listener bind
//! 4. Serve until the server stops

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::catalog::PokemonCatalog;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

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
        Command::Serve {
            config,
            port,
            data_file,
        } => serve(config.as_deref(), port, data_file),
        Command::Check { config, data_file } => check(config.as_deref(), data_file),
    }
}

/// Load the catalog and serve it over HTTP.
pub fn serve(config_path: Option<&Path>, port: Option<u16>, data_file: Option<PathBuf>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = Config::resolve(config_path)?.with_overrides(port, data_file)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_file", &config.data_file.display().to_string()),
            ("addr", &config.http.socket_addr()),
        ],
    );

    let catalog = PokemonCatalog::load(&config.data_file).map_err(|e| {
        log_event_with_fields(Event::BootFailed, &[("error", &e.to_string())]);
        CliError::from(e)
    })?;

    let server = HttpServer::new(config.http, catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    log_event(Event::ShutdownComplete);
    Ok(())
}

/// Load the data file and print how many rows were accepted and skipped.
pub fn check(config_path: Option<&Path>, data_file: Option<PathBuf>) -> CliResult<()> {
    let config = Config::resolve(config_path)?.with_overrides(None, data_file)?;
    let catalog = PokemonCatalog::load(&config.data_file)?;
    let summary = catalog.load_summary();

    write_response(json!({
        "data_file": config.data_file.display().to_string(),
        "records": summary.records,
        "skipped": summary.skipped,
    }))
}
