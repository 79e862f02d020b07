//! Validation of submitted JSON values against the column table
//!
//! Validation semantics:
//! - Integers must be JSON numbers, at least the column minimum, and must
//!   format to an in-range integer that is also at least the minimum
//! - Required text must be a non-empty JSON string within the length cap
//! - Nullable text may be null, absent or empty
//! - Text must not contain the field delimiter or a line break
//! - Booleans must be JSON booleans
//!
//! Every violated column is reported, in table order.

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::format::format_int;
use super::registry::COLUMNS;
use super::types::{ColumnDef, ColumnKind};

/// Characters that would break a row of the data file
const RESERVED_CHARS: [char; 3] = [',', '\n', '\r'];

/// Why a submitted value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Wrong type, out of range, empty or too long
    Invalid,
    /// Text holding the delimiter or a line break
    ReservedChars,
}

impl Violation {
    /// Client message for this violation on `col`
    pub fn message(self, col: &ColumnDef) -> String {
        match self {
            Violation::Invalid => col.invalid_msg.to_string(),
            Violation::ReservedChars => {
                format!("Attribute '{}' must not contain commas or line breaks.", col.name)
            }
        }
    }
}

fn check_text(s: &str, max_len: usize) -> Result<(), Violation> {
    if s.chars().count() > max_len {
        return Err(Violation::Invalid);
    }
    if s.contains(&RESERVED_CHARS[..]) {
        return Err(Violation::ReservedChars);
    }
    Ok(())
}

/// Checks a single submitted value against a column kind.
pub fn check_value(kind: ColumnKind, value: &Value) -> Result<(), Violation> {
    match kind {
        ColumnKind::Integer { min } => {
            let at_least_min = value.as_f64().is_some_and(|v| v >= min as f64);
            match format_int(value) {
                Some(v) if at_least_min && v >= min => Ok(()),
                _ => Err(Violation::Invalid),
            }
        }
        ColumnKind::Text { max_len } => match value {
            Value::String(s) if !s.is_empty() => check_text(s, max_len),
            _ => Err(Violation::Invalid),
        },
        ColumnKind::NullableText { max_len } => match value {
            Value::Null => Ok(()),
            Value::String(s) => check_text(s, max_len),
            _ => Err(Violation::Invalid),
        },
        ColumnKind::Bool if value.is_boolean() => Ok(()),
        ColumnKind::Bool => Err(Violation::Invalid),
    }
}

/// Whether a submitted value passes its column kind.
pub fn validate_value(kind: ColumnKind, value: &Value) -> bool {
    check_value(kind, value).is_ok()
}

/// Validates a full record for creation.
///
/// Every column is checked; an absent field is treated as null.
pub fn validate_for_create(data: &Map<String, Value>) -> SchemaResult<()> {
    let invalid: Vec<String> = COLUMNS
        .iter()
        .filter_map(|col| {
            check_value(col.kind, data.get(col.name).unwrap_or(&Value::Null))
                .err()
                .map(|violation| violation.message(col))
        })
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::InvalidFields(invalid))
    }
}

/// Validates a partial record for update.
///
/// Only fields naming a known column are checked; unknown fields are ignored.
/// At least one known column must be present. Returns the number of usable
/// fields on success.
pub fn validate_for_update(data: &Map<String, Value>) -> SchemaResult<usize> {
    let mut usable = 0;
    let mut invalid = Vec::new();

    for col in &COLUMNS {
        if let Some(value) = data.get(col.name) {
            usable += 1;
            if let Err(violation) = check_value(col.kind, value) {
                invalid.push(violation.message(col));
            }
        }
    }

    if !invalid.is_empty() {
        return Err(SchemaError::InvalidFields(invalid));
    }
    if usable == 0 {
        return Err(SchemaError::NoUsableFields);
    }
    Ok(usable)
}
