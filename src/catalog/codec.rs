//! Row codec for the delimited data file
//!
//! File layout:
//! - First line: column names in table order (never decoded as data)
//! - One line per record, fields in table order, joined by `,`
//! - Empty field = null
//!
//! Decoding is best effort. A row with too few fields is skipped and
//! counted, it never fails the load. Every other row is kept, field by field.

use crate::schema::{parse_leading_int, column_names, ColumnKind, FieldValue, COLUMNS, COLUMN_COUNT};

use super::record::Record;

pub const DELIMITER: char = ',';

/// Outcome of decoding a whole data file
#[derive(Debug, Default)]
pub struct DecodedFile {
    /// Accepted records, in file order
    pub records: Vec<Record>,
    /// Non-blank data lines that were rejected
    pub skipped: usize,
}

/// Decodes a single data line.
///
/// Returns `None` when the line has fewer fields than there are columns.
/// Fields that do not parse for their column become null. Extra trailing
/// fields are ignored.
pub fn decode_line(line: &str) -> Option<Record> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < COLUMN_COUNT {
        return None;
    }

    let values = COLUMNS
        .iter()
        .zip(fields)
        .map(|(col, raw)| decode_field(col.kind, raw))
        .collect();

    Record::from_values(values)
}

fn decode_field(kind: ColumnKind, raw: &str) -> FieldValue {
    match kind {
        ColumnKind::Bool => FieldValue::Bool(raw.eq_ignore_ascii_case("true")),
        ColumnKind::Text { .. } | ColumnKind::NullableText { .. } => {
            if raw.is_empty() {
                FieldValue::Null
            } else {
                FieldValue::Text(raw.to_string())
            }
        }
        ColumnKind::Integer { .. } => parse_leading_int(raw).map_or(FieldValue::Null, FieldValue::Int),
    }
}

/// Decodes the full contents of a data file; the first line is the header.
pub fn decode_file(content: &str) -> DecodedFile {
    let mut decoded = DecodedFile::default();

    for line in content.split('\n').skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Some(record) => decoded.records.push(record),
            None => decoded.skipped += 1,
        }
    }

    decoded
}

/// Header line: column names in table order
pub fn encode_header() -> String {
    column_names().collect::<Vec<_>>().join(&DELIMITER.to_string())
}

/// One data line; null values become empty fields.
pub fn encode_record(record: &Record) -> String {
    record
        .values()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Encodes the header followed by every record, in the given order.
///
/// Lines are separated by `\n`; there is no trailing newline.
pub fn encode_file<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut content = encode_header();
    for record in records {
        content.push('\n');
        content.push_str(&encode_record(record));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary";

    #[test]
    fn test_header_matches_column_table() {
        assert_eq!(encode_header(), HEADER);
    }

    #[test]
    fn test_decode_line() {
        let record = decode_line("6,Charizard,Fire,Flying,534,78,84,78,109,85,100,1,False").unwrap();
        assert_eq!(record.name(), "Charizard");
        assert_eq!(record.number(), 6);
        assert_eq!(record.get("Type 2"), Some(&FieldValue::Text("Flying".into())));
        assert_eq!(record.get("Legendary"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_decode_line_null_and_bool_variants() {
        let record = decode_line("150,Mewtwo,Psychic,,680,106,110,90,154,90,130,1,TRUE\r").unwrap();
        assert_eq!(record.get("Type 2"), Some(&FieldValue::Null));
        assert_eq!(record.get("Legendary"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_decode_line_rejects_short_rows() {
        assert!(decode_line("1,Bulbasaur,Grass").is_none());
        assert!(decode_line("").is_none());
    }

    #[test]
    fn test_decode_line_ignores_extra_fields() {
        let record = decode_line("1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,False,extra").unwrap();
        assert_eq!(record.values().len(), COLUMN_COUNT);
    }

    #[test]
    fn test_decode_line_keeps_out_of_range_values() {
        let record = decode_line("0,MissingNo,Bird,,0,33,136,0,6,6,29,1,False").unwrap();
        assert_eq!(record.number(), 0);
        assert_eq!(record.get("Total"), Some(&FieldValue::Int(0)));

        let record = decode_line("1,Bulbasaur,Grass,Poison,318,xx,49,49,65,65,45,1,False").unwrap();
        assert_eq!(record.get("HP"), Some(&FieldValue::Null));
        assert_eq!(
            encode_record(&record),
            "1,Bulbasaur,Grass,Poison,318,,49,49,65,65,45,1,false"
        );
    }

    #[test]
    fn test_decode_file_skips_header_and_bad_rows() {
        let content = format!(
            "{}\n1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,False\nbroken,row\n\n4,Charmander,Fire,,309,39,52,43,60,50,65,1,False\n",
            HEADER
        );
        let decoded = decode_file(&content);
        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.skipped, 1);
        assert_eq!(decoded.records[1].name(), "Charmander");
    }

    #[test]
    fn test_decode_header_only() {
        let decoded = decode_file(HEADER);
        assert!(decoded.records.is_empty());
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_encode_renders_null_as_empty() {
        let record = decode_line("4,Charmander,Fire,,309,39,52,43,60,50,65,1,False").unwrap();
        assert_eq!(encode_record(&record), "4,Charmander,Fire,,309,39,52,43,60,50,65,1,false");
    }

    #[test]
    fn test_encode_then_decode() {
        let records = vec![
            decode_line("4,Charmander,Fire,,309,39,52,43,60,50,65,1,False").unwrap(),
            decode_line("1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,False").unwrap(),
        ];
        let content = encode_file(&records);
        assert!(!content.ends_with('\n'));

        let decoded = decode_file(&content);
        assert_eq!(decoded.records, records);
        assert_eq!(decoded.skipped, 0);
    }
}
