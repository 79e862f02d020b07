//! Pokemon HTTP Routes
//!
//! CRUD endpoints over the catalog. Mutations answer `204 No Content` once the
//! data file has been rewritten; failures answer with a plain text message.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{Map, Value};

use crate::catalog::{CatalogError, CatalogResult, PokemonCatalog};
use crate::schema::parse_leading_int;

// ==================
// Shared State
// ==================

/// Catalog shared across handlers.
///
/// Each handler holds the lock for its whole operation, so requests touching
/// the catalog are serialized.
pub struct PokemonState {
    catalog: Mutex<PokemonCatalog>,
}

impl PokemonState {
    pub fn new(catalog: PokemonCatalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, PokemonCatalog>> {
        self.catalog
            .lock()
            .map_err(|_| CatalogError::Internal("catalog lock poisoned".into()))
    }
}

// ==================
// Error Responses
// ==================

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.client_message()).into_response()
    }
}

// ==================
// Pokemon Routes
// ==================

/// Create pokemon routes
pub fn pokemon_routes(state: Arc<PokemonState>) -> Router {
    Router::new()
        .route("/getPokemon/:name", get(get_pokemon_handler))
        .route("/getPokemonCatalog/:page", get(get_catalog_handler))
        .route("/createPokemon", post(create_pokemon_handler))
        .route("/updatePokemon/:name", put(update_pokemon_handler))
        .route("/deletePokemon/:name", delete(delete_pokemon_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parses a page index: a leading integer, at least 0.
///
/// Indexes too large for the integer type saturate, landing past the end.
fn parse_page(raw: &str) -> CatalogResult<usize> {
    match parse_leading_int(raw) {
        Some(page) => usize::try_from(page).map_err(|_| CatalogError::invalid_page()),
        None if starts_with_digits(raw) => Ok(usize::MAX),
        None => Err(CatalogError::invalid_page()),
    }
}

/// Whether `raw` opens with unsigned digits, after whitespace and an optional `+`.
fn starts_with_digits(raw: &str) -> bool {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    s.starts_with(|c: char| c.is_ascii_digit())
}

/// Unwraps a JSON body into an object. Any other JSON value carries no
/// fields.
fn body_fields(body: Result<Json<Value>, JsonRejection>) -> CatalogResult<Map<String, Value>> {
    match body {
        Ok(Json(Value::Object(fields))) => Ok(fields),
        Ok(Json(_)) => Ok(Map::new()),
        Err(rejection) => Err(CatalogError::MalformedInput(rejection.body_text())),
    }
}

// ==================
// Handlers
// ==================

async fn get_pokemon_handler(
    State(state): State<Arc<PokemonState>>,
    Path(name): Path<String>,
) -> Result<Response, CatalogError> {
    let catalog = state.lock()?;
    let record = catalog.get(&name)?;
    Ok(Json(record).into_response())
}

async fn get_catalog_handler(
    State(state): State<Arc<PokemonState>>,
    Path(page): Path<String>,
) -> Result<Response, CatalogError> {
    let index = parse_page(&page)?;
    let mut catalog = state.lock()?;
    Ok(Json(catalog.page(index)).into_response())
}

async fn create_pokemon_handler(
    State(state): State<Arc<PokemonState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, CatalogError> {
    let fields = body_fields(body)?;
    state.lock()?.create(&fields)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_pokemon_handler(
    State(state): State<Arc<PokemonState>>,
    Path(name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, CatalogError> {
    let fields = body_fields(body)?;
    state.lock()?.update(&name, &fields)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_pokemon_handler(
    State(state): State<Arc<PokemonState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, CatalogError> {
    state.lock()?.delete(&name)?;
    Ok(StatusCode::NO_CONTENT)
}
