//! # Catalog Errors

use std::io;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    // Validation errors
    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    MalformedInput(String),

    // Record errors
    #[error("Pokemon not found.")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    // I/O errors
    #[error("Failed to read catalog file '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write catalog file '{path}': {source}")]
    Persistence {
        path: String,
        #[source]
        source: io::Error,
    },

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn name_taken() -> Self {
        CatalogError::Conflict("A pokemon with that name already exists.".into())
    }

    pub fn new_name_taken() -> Self {
        CatalogError::Conflict("A pokemon with the new entered name already exists.".into())
    }

    pub fn invalid_page() -> Self {
        CatalogError::MalformedInput(
            "A page number is required in the request URI. The page number must be a positive integer."
                .into(),
        )
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Schema(_) => 400,
            CatalogError::MalformedInput(_) => 400,
            CatalogError::NotFound => 404,
            CatalogError::Conflict(_) => 409,
            CatalogError::Load { .. } => 500,
            CatalogError::Persistence { .. } => 500,
            CatalogError::Internal(_) => 500,
        }
    }

    /// Message safe to hand back to a client.
    ///
    /// Server-side failures do not leak file paths.
    pub fn client_message(&self) -> String {
        match self {
            CatalogError::Load { .. } => "The catalog could not be loaded.".to_string(),
            CatalogError::Persistence { .. } => "The catalog could not be saved.".to_string(),
            CatalogError::Internal(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the error is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}
