//! Student record domain model.
//!
//! # Responsibility
//! - Define the canonical `{name, roll, grade, marks}` record.
//! - Turn raw form input into a validated record.
//!
//! # Invariants
//! - `name` and `roll` are non-empty for every record accepted by services.
//! - `roll` is the identity key; uniqueness is enforced by callers of the
//!   container, not by the record itself.
//! - The serialized shape is exactly `name`, `roll`, `grade`, `marks`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One student's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name.
    pub name: String,
    /// Roll number, used as the identity key.
    pub roll: String,
    /// Free-form grade label (`A`, `B+`, ...).
    pub grade: String,
    /// Integer marks. Negative values are accepted.
    pub marks: i64,
}

impl Record {
    /// Creates a record without validation.
    pub fn new(
        name: impl Into<String>,
        roll: impl Into<String>,
        grade: impl Into<String>,
        marks: i64,
    ) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
            grade: grade.into(),
            marks,
        }
    }

    /// Checks the identity fields.
    ///
    /// # Errors
    /// - `MissingField("name")` when `name` is blank.
    /// - `MissingField("roll")` when `roll` is blank.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::MissingField("name"));
        }
        if self.roll.trim().is_empty() {
            return Err(RecordValidationError::MissingField("roll"));
        }
        Ok(())
    }
}

/// Validation failures for record input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// A required field is empty after trimming.
    MissingField(&'static str),
    /// `marks` does not start with an integer.
    InvalidMarks(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidMarks(raw) => write!(f, "marks must be an integer, got `{raw}`"),
        }
    }
}

impl Error for RecordValidationError {}

/// Raw, unvalidated form input for add/edit flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub name: String,
    pub roll: String,
    pub grade: String,
    pub marks: String,
}

impl RecordInput {
    pub fn new(
        name: impl Into<String>,
        roll: impl Into<String>,
        grade: impl Into<String>,
        marks: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
            grade: grade.into(),
            marks: marks.into(),
        }
    }

    /// Trims and validates every field into a [`Record`].
    ///
    /// All four fields are required on the form path; `marks` uses
    /// leading-integer parsing (see [`parse_marks`]).
    pub fn parse(&self) -> Result<Record, RecordValidationError> {
        let name = self.name.trim();
        let roll = self.roll.trim();
        let grade = self.grade.trim();

        if name.is_empty() {
            return Err(RecordValidationError::MissingField("name"));
        }
        if roll.is_empty() {
            return Err(RecordValidationError::MissingField("roll"));
        }
        if grade.is_empty() {
            return Err(RecordValidationError::MissingField("grade"));
        }
        let marks = parse_marks(&self.marks)
            .ok_or_else(|| RecordValidationError::InvalidMarks(self.marks.clone()))?;

        Ok(Record::new(name, roll, grade, marks))
    }
}

/// Parses the leading base-10 integer of `raw`.
///
/// Leading whitespace and one optional sign are accepted; parsing stops at
/// the first non-digit, so `"85.5"` yields `85` and `"12abc"` yields `12`.
/// Returns `None` when no digit follows, or on `i64` overflow.
pub fn parse_marks(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::parse_marks;

    #[test]
    fn parse_marks_takes_leading_integer() {
        assert_eq!(parse_marks("85"), Some(85));
        assert_eq!(parse_marks("  85  "), Some(85));
        assert_eq!(parse_marks("85.5"), Some(85));
        assert_eq!(parse_marks("12abc"), Some(12));
        assert_eq!(parse_marks("+7"), Some(7));
        assert_eq!(parse_marks("-3"), Some(-3));
    }

    #[test]
    fn parse_marks_rejects_non_numeric_input() {
        assert_eq!(parse_marks(""), None);
        assert_eq!(parse_marks("abc"), None);
        assert_eq!(parse_marks("-"), None);
        assert_eq!(parse_marks("+-1"), None);
        assert_eq!(parse_marks("99999999999999999999"), None);
    }
}
