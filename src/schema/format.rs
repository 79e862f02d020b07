//! Formatting of raw input into canonical stored values
//!
//! Formatting is total: it never fails. A value from which nothing usable
//! can be derived comes out as `None` (or `FieldValue::Null`). Validation is
//! what keeps such values out of the store.

use serde_json::Value;

use super::types::{ColumnKind, FieldValue};

/// Derives an integer from a JSON number or string.
///
/// Numbers are rounded to the nearest integer (half away from zero).
/// Strings yield their leading integer, see [`parse_leading_int`].
pub fn format_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Some(v);
            }
            let f = n.as_f64()?.round();
            if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Parses the leading integer of a string.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the
/// longest run of ASCII digits is taken. Anything after it is ignored, so
/// `"12abc"` is 12 and `"3.9"` is 3. No digits, or overflow, is `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Formats a submitted value into its stored form for the given column kind.
///
/// Callers validate first; this only canonicalizes. An empty string in the
/// nullable text column is stored as null.
pub fn format_value(kind: ColumnKind, value: &Value) -> FieldValue {
    match kind {
        ColumnKind::Integer { .. } => format_int(value).map_or(FieldValue::Null, FieldValue::Int),
        ColumnKind::Text { .. } | ColumnKind::NullableText { .. } => match value {
            Value::String(s) if !s.is_empty() => FieldValue::Text(s.clone()),
            _ => FieldValue::Null,
        },
        ColumnKind::Bool => value.as_bool().map_or(FieldValue::Null, FieldValue::Bool),
    }
}
