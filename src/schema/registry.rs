//! The fixed column table
//!
//! Order matters: it is the column order of the data file and the key order
//! of every serialized record.

use super::types::{ColumnDef, ColumnKind};

pub const COLUMN_COUNT: usize = 13;

/// Display ordering column
pub const NUMBER_COLUMN: &str = "#";
pub const NUMBER_INDEX: usize = 0;

/// Business key column
pub const NAME_COLUMN: &str = "Name";
pub const NAME_INDEX: usize = 1;

const fn stat(name: &'static str, invalid_msg: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        kind: ColumnKind::Integer { min: 1 },
        invalid_msg,
    }
}

pub static COLUMNS: [ColumnDef; COLUMN_COUNT] = [
    ColumnDef {
        name: NUMBER_COLUMN,
        kind: ColumnKind::Integer { min: 1 },
        invalid_msg: "Attribute '#' must be an integer, greater than 1 and must not be null.",
    },
    ColumnDef {
        name: NAME_COLUMN,
        kind: ColumnKind::Text { max_len: 45 },
        invalid_msg: "Attribute 'Name' must be a string of maximum 45 characters and must not be null or empty.",
    },
    ColumnDef {
        name: "Type 1",
        kind: ColumnKind::Text { max_len: 20 },
        invalid_msg: "Attribute 'Type 1' must be a string of maximum 20 characters and must not be null or empty.",
    },
    ColumnDef {
        name: "Type 2",
        kind: ColumnKind::NullableText { max_len: 20 },
        invalid_msg: "Attribute 'Type 2' must be a string of maximum 20 characters.",
    },
    stat("Total", "Attribute 'Total' must be an integer, greater than 0 and must not be null."),
    stat("HP", "Attribute 'HP' must be an integer, greater than 0 and must not be null."),
    stat("Attack", "Attribute 'Attack' must be an integer, greater than 0 and must not be null."),
    stat("Defense", "Attribute 'Defense' must be an integer, greater than 0 and must not be null."),
    stat("Sp. Atk", "Attribute 'Sp. Atk' must be an integer, greater than 0 and must not be null."),
    stat("Sp. Def", "Attribute 'Sp. Def' must be an integer, greater than 0 and must not be null."),
    stat("Speed", "Attribute 'Speed' must be an integer, greater than 0 and must not be null."),
    stat("Generation", "Attribute 'Generation' must be an integer, greater than 0 and must not be null."),
    ColumnDef {
        name: "Legendary",
        kind: ColumnKind::Bool,
        invalid_msg: "Attribute 'Legendary' must be a boolean and must not be null.",
    },
];

/// Looks up a column by name.
pub fn column(name: &str) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|c| c.name == name)
}

/// Position of a column in the table.
pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| c.name == name)
}

/// Column names in table order.
pub fn column_names() -> impl Iterator<Item = &'static str> {
    COLUMNS.iter().map(|c| c.name)
}
