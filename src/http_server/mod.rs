//! # Pokedex HTTP Server Module
//!
//! Axum server exposing the catalog.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /getPokemon/:name` - Single record
//! - `GET /getPokemonCatalog/:page` - Sorted page of 50 records
//! - `POST /createPokemon` - Create a record
//! - `PUT /updatePokemon/:name` - Update (and possibly rename) a record
//! - `DELETE /deletePokemon/:name` - Delete a record

pub mod config;
pub mod observability_routes;
pub mod pokemon_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use pokemon_routes::{pokemon_routes, PokemonState};
pub use server::HttpServer;
