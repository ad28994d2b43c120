//! CSV parsing for bulk import.
//!
//! # Invariants
//! - The first non-empty line is a header when it names both `name` and
//!   `roll` (case-insensitive, quotes ignored); it is never imported.
//! - Quoted fields keep embedded commas; `""` inside quotes yields `"`.
//! - Rows with fewer than four fields, blank name/roll, or non-integer
//!   marks are skipped and counted.

use crate::model::record::{parse_marks, Record};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("valid line break regex"));
static HEADER_QUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']"#).expect("valid header quote regex"));

const MIN_FIELDS: usize = 4;

/// Parsed import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    /// Valid records in file order.
    pub records: Vec<Record>,
    /// Data rows dropped by validation.
    pub skipped_rows: usize,
    /// Whether the first line was treated as a header.
    pub had_header: bool,
}

impl ImportBatch {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Returns the non-empty lines of `text`.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK_RE
        .split(text)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses CSV `text` into an [`ImportBatch`].
pub fn parse_records(text: &str) -> ImportBatch {
    let lines = split_lines(text);
    let Some(first) = lines.first() else {
        return ImportBatch::default();
    };

    let had_header = is_header_line(first);
    let start = usize::from(had_header);

    let mut batch = ImportBatch {
        had_header,
        ..ImportBatch::default()
    };
    for (offset, line) in lines[start..].iter().enumerate() {
        match parse_row(line) {
            Some(record) => batch.records.push(record),
            None => {
                debug!(
                    "event=csv_row_skipped module=transfer line={}",
                    start + offset + 1
                );
                batch.skipped_rows += 1;
            }
        }
    }

    batch
}

/// Splits one CSV line into trimmed fields.
///
/// A field that is still wrapped in one pair of double quotes after
/// unescaping (`"""x"""` gives `"x"`) is unwrapped once more.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);

    fields.iter().map(|field| unwrap_field(field)).collect()
}

fn unwrap_field(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.to_string(),
        None => trimmed.to_string(),
    }
}

fn is_header_line(line: &str) -> bool {
    let columns = line
        .split(',')
        .map(|column| HEADER_QUOTE_RE.replace_all(column, "").trim().to_lowercase())
        .collect::<Vec<_>>();
    columns.iter().any(|column| column == "name") && columns.iter().any(|column| column == "roll")
}

fn parse_row(line: &str) -> Option<Record> {
    let fields = parse_csv_line(line);
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let name = fields[0].trim();
    let roll = fields[1].trim();
    if name.is_empty() || roll.is_empty() {
        return None;
    }
    let marks = parse_marks(&fields[3])?;

    Some(Record::new(name, roll, fields[2].trim(), marks))
}
