//! pokedex - CRUD over a CSV-backed Pokemon catalog
//!
//! - `schema`: the fixed column table, formatting and validation
//! - `catalog`: row codec, record store, sorted view, mutations
//! - `http_server`: axum routes over the catalog
//! - `cli`: command line entry point and configuration

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
