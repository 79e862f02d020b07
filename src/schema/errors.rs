//! Schema error types

use thiserror::Error;

use super::registry::column_names;

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Validation failures against the column table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more submitted values were rejected, one message per column
    #[error("{}", .0.join("\n"))]
    InvalidFields(Vec<String>),

    /// An update body named none of the known columns
    #[error("updatePokemon request body must contain at least 1 of the following fields: '{}'.", column_names().collect::<Vec<_>>().join("', '"))]
    NoUsableFields,
}

impl SchemaError {
    /// Messages of the rejected columns, in table order
    pub fn messages(&self) -> Vec<String> {
        match self {
            SchemaError::InvalidFields(msgs) => msgs.clone(),
            SchemaError::NoUsableFields => vec![self.to_string()],
        }
    }
}
