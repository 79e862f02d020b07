//! Column and value type definitions
//!
//! Supported kinds:
//! - Integer: 64-bit signed integer with a lower bound
//! - Text: required, non-empty UTF-8 string with a length cap
//! - NullableText: optional UTF-8 string with a length cap
//! - Bool: boolean

use serde::Serialize;
use std::fmt;

/// Column kinds, each with its own constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Integer, at least `min`
    Integer { min: i64 },
    /// Non-empty string of at most `max_len` characters
    Text { max_len: usize },
    /// String of at most `max_len` characters, or null
    NullableText { max_len: usize },
    /// Boolean
    Bool,
}

impl ColumnKind {
    /// Returns the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnKind::Integer { .. } => "int",
            ColumnKind::Text { .. } => "string",
            ColumnKind::NullableText { .. } => "string?",
            ColumnKind::Bool => "bool",
        }
    }

    /// Whether a stored value of this kind may be null
    pub fn is_nullable(&self) -> bool {
        matches!(self, ColumnKind::NullableText { .. })
    }
}

/// A single column of the catalog table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name, unique across the table
    pub name: &'static str,
    /// Value kind and constraints
    pub kind: ColumnKind,
    /// Message reported when a submitted value is rejected
    pub invalid_msg: &'static str,
}

/// A canonical stored value.
///
/// Serializes untagged, so `Null` becomes JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Renders the value as it appears in the data file; null is empty.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}
