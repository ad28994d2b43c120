//! CSV rendering of record snapshots.

use crate::model::record::Record;

/// Header row written before any data row.
pub const CSV_HEADER: &str = "name,roll,grade,marks";

/// Renders `records` as CSV text.
///
/// Every field is wrapped in double quotes with inner quotes doubled. Rows
/// are joined by `\n` without a trailing newline.
pub fn export_csv(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(records.iter().map(csv_row));
    lines.join("\n")
}

/// Renders one record as a quoted CSV row without a line terminator.
///
/// The row parses back to the same four fields with
/// [`crate::transfer::csv_import::parse_csv_line`].
pub fn csv_row(record: &Record) -> String {
    [
        quote_field(&record.name),
        quote_field(&record.roll),
        quote_field(&record.grade),
        quote_field(&record.marks.to_string()),
    ]
    .join(",")
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
