//! Schema registry for the Pokemon catalog
//!
//! The catalog has one fixed table of columns. Each column carries a kind
//! (which decides how raw input is formatted and validated) and the message
//! reported to clients when a value is rejected.
//!
//! # Design Principles
//!
//! - The column table is static; there are no runtime schema changes
//! - Column order is the file order and the JSON key order
//! - Validation collects every violation, it never stops at the first one
//! - Formatting never fails; an underivable value becomes `None`

mod errors;
mod format;
mod registry;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use format::{format_int, format_value, parse_leading_int};
pub use registry::{
    column, column_index, column_names, COLUMNS, COLUMN_COUNT, NAME_COLUMN, NAME_INDEX,
    NUMBER_COLUMN, NUMBER_INDEX,
};
pub use types::{ColumnDef, ColumnKind, FieldValue};
pub use validator::{check_value, validate_for_create, validate_for_update, validate_value, Violation};
