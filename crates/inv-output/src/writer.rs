//! CSV serialization of selected records.
//!
//! The export dialect differs from what the tokenizer accepts: every empty
//! field is written as `""`, and semicolons force quoting. Rows are joined
//! with CRLF and the document carries no trailing terminator.

use inv_model::Record;

/// Header row of every export.
pub const EXPORT_HEADER: [&str; 5] = [
    "NSN",
    "Description",
    "Unit of Measure",
    "Quantity Required",
    "Kit Membership",
];

/// Row separator.
pub const LINE_ENDING: &str = "\r\n";

/// Serializes records in the given order under the fixed header.
///
/// The kit column uses the raw membership text. An empty slice produces a
/// header-only document.
pub fn serialize_records(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(EXPORT_HEADER.join(","));
    for record in records {
        lines.push(serialize_row(record));
    }
    lines.join(LINE_ENDING)
}

fn serialize_row(record: &Record) -> String {
    [
        record.nsn(),
        record.description(),
        record.unit_of_measure(),
        record.quantity(),
        record.kits_raw(),
    ]
    .iter()
    .map(|value| escape_field(value))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quotes a field when it is empty or contains a comma, quote, semicolon, or
/// line break; embedded quotes are doubled.
pub fn escape_field(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | ';' | '\n' | '\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_commas_and_quotes() {
        assert_eq!(escape_field("He said, \"hi\""), "\"He said, \"\"hi\"\"\"");
    }

    #[test]
    fn empty_field_is_quoted() {
        assert_eq!(escape_field(""), "\"\"");
    }

    #[test]
    fn semicolons_and_line_breaks_force_quotes() {
        assert_eq!(escape_field("KitA;KitB"), "\"KitA;KitB\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field("cr\rhere"), "\"cr\rhere\"");
    }

    #[test]
    fn plain_fields_are_bare() {
        assert_eq!(escape_field("5340-01-234-5678"), "5340-01-234-5678");
        assert_eq!(escape_field("Bolt 1/2 in"), "Bolt 1/2 in");
    }

    #[test]
    fn empty_selection_is_header_only() {
        assert_eq!(
            serialize_records(&[]),
            "NSN,Description,Unit of Measure,Quantity Required,Kit Membership"
        );
    }

    #[test]
    fn rows_follow_input_order_joined_with_crlf() {
        let records = vec![
            Record::new("2", "Nut", "EA", "", "KitA;KitB"),
            Record::new("1", "Bolt, hex", "BX", "10", ""),
        ];
        assert_eq!(
            serialize_records(&records),
            "NSN,Description,Unit of Measure,Quantity Required,Kit Membership\r\n\
             2,Nut,EA,\"\",\"KitA;KitB\"\r\n\
             1,\"Bolt, hex\",BX,10,\"\""
        );
    }
}
