//! CLI argument definitions using clap
//!
//! Commands:
//! - pokedex serve [--config <path>] [--port <port>] [--data-file <path>]
//! - pokedex check [--config <path>] [--data-file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pokedex - CRUD over a CSV-backed Pokemon catalog
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and serve it over HTTP
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides the configuration file)
        #[arg(long)]
        port: Option<u16>,

        /// Data file to serve (overrides the configuration file)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Load the data file, report what was accepted, and exit
    Check {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Data file to check (overrides the configuration file)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
