//! Catalog record
//!
//! A record holds exactly one value per column, in column table order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::schema::{
    column_index, format_value, FieldValue, COLUMNS, COLUMN_COUNT, NAME_INDEX, NUMBER_INDEX,
};

/// One row of the catalog, keyed by its `Name` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<FieldValue>,
}

impl Record {
    /// Builds a record from values in column order.
    ///
    /// Returns `None` unless there is exactly one value per column.
    pub fn from_values(values: Vec<FieldValue>) -> Option<Self> {
        if values.len() != COLUMN_COUNT {
            return None;
        }
        Some(Self { values })
    }

    /// Builds a record from a validated JSON object, formatting each column.
    ///
    /// Absent columns are stored as null.
    pub fn from_json(data: &Map<String, Value>) -> Self {
        let values = COLUMNS
            .iter()
            .map(|col| format_value(col.kind, data.get(col.name).unwrap_or(&Value::Null)))
            .collect();
        Self { values }
    }

    /// Overwrites every known column present in `data` with its formatted value.
    ///
    /// Unknown keys are ignored.
    pub fn apply(&mut self, data: &Map<String, Value>) {
        for (key, value) in data {
            if let Some(idx) = column_index(key) {
                self.values[idx] = format_value(COLUMNS[idx].kind, value);
            }
        }
    }

    /// The business key
    pub fn name(&self) -> &str {
        self.values[NAME_INDEX].as_str().unwrap_or_default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values[NAME_INDEX] = FieldValue::Text(name.into());
    }

    /// The display ordering number (`#`)
    pub fn number(&self) -> i64 {
        self.values[NUMBER_INDEX].as_int().unwrap_or_default()
    }

    /// Value of a column by name
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        column_index(column).map(|idx| &self.values[idx])
    }

    /// Values in column order
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}

/// Serializes as a JSON object with keys in column order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for (col, value) in COLUMNS.iter().zip(&self.values) {
            map.serialize_entry(col.name, value)?;
        }
        map.end()
    }
}
