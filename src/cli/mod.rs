//! CLI module for pokedex
//!
//! Provides command-line interface for:
//! - serve: Load the catalog and serve it over HTTP
//! - check: Load the data file and report accepted/skipped rows

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
