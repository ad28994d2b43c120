use rollbook_core::{Record, RecordInput, RecordValidationError};

#[test]
fn record_serializes_with_plain_field_names() {
    let record = Record::new("Asha", "12", "A", 91);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Asha", "roll": "12", "grade": "A", "marks": 91})
    );

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn record_input_trims_every_field() {
    let input = RecordInput::new("  Asha ", " 12", " A+ ", " 88 ");

    let record = input.parse().unwrap();
    assert_eq!(record, Record::new("Asha", "12", "A+", 88));
}

#[test]
fn record_input_requires_name_roll_and_grade() {
    let missing_name = RecordInput::new("  ", "1", "A", "10").parse().unwrap_err();
    assert_eq!(missing_name, RecordValidationError::MissingField("name"));

    let missing_roll = RecordInput::new("Asha", "", "A", "10").parse().unwrap_err();
    assert_eq!(missing_roll, RecordValidationError::MissingField("roll"));

    let missing_grade = RecordInput::new("Asha", "1", " ", "10").parse().unwrap_err();
    assert_eq!(missing_grade, RecordValidationError::MissingField("grade"));
}

#[test]
fn record_input_rejects_non_integer_marks() {
    let err = RecordInput::new("Asha", "1", "A", "ninety").parse().unwrap_err();
    assert_eq!(err, RecordValidationError::InvalidMarks("ninety".to_string()));
    assert!(err.to_string().contains("ninety"));
}

#[test]
fn record_input_truncates_fractional_marks() {
    let record = RecordInput::new("Asha", "1", "A", "72.9").parse().unwrap();
    assert_eq!(record.marks, 72);
}

#[test]
fn validate_checks_identity_fields_only() {
    assert!(Record::new("Asha", "1", "", 0).validate().is_ok());
    assert_eq!(
        Record::new("Asha", " ", "A", 0).validate().unwrap_err(),
        RecordValidationError::MissingField("roll")
    );
}
