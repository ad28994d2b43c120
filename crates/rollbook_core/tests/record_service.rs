use rollbook_core::db::open_db_in_memory;
use rollbook_core::{
    MemorySlotStore, Record, RecordInput, RecordService, SaveOutcome, ServiceError, Session,
    SlotStore, SortOrder, SqliteSlotStore, RECORDS_SLOT_KEY,
};

fn input(name: &str, roll: &str, grade: &str, marks: &str) -> RecordInput {
    RecordInput::new(name, roll, grade, marks)
}

fn seeded() -> RecordService<MemorySlotStore> {
    let service = RecordService::new(MemorySlotStore::new());
    service.add_record(&input("Cara", "3", "B", "50")).unwrap();
    service.add_record(&input("Asha", "1", "A", "90")).unwrap();
    service.add_record(&input("Ben", "2", "B", "50")).unwrap();
    service
}

fn rolls(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.roll.as_str()).collect()
}

#[test]
fn add_persists_record() {
    let conn = open_db_in_memory().unwrap();
    let service = RecordService::new(SqliteSlotStore::new(&conn));

    let added = service.add_record(&input(" Asha ", "1", "A", "80")).unwrap();

    assert_eq!(added, Record::new("Asha", "1", "A", 80));
    assert_eq!(service.list_records(), vec![added]);
}

#[test]
fn add_with_duplicate_roll_is_rejected_and_state_unchanged() {
    let service = RecordService::new(MemorySlotStore::new());
    service.add_record(&input("A", "1", "B", "80")).unwrap();

    let err = service.add_record(&input("B", "1", "C", "70")).unwrap_err();

    assert!(matches!(err, ServiceError::DuplicateRoll(ref roll) if roll == "1"));
    assert_eq!(service.list_records(), vec![Record::new("A", "1", "B", 80)]);
}

#[test]
fn add_with_invalid_input_is_rejected() {
    let service = RecordService::new(MemorySlotStore::new());

    let err = service.add_record(&input("A", "1", "B", "x")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = service.add_record(&input("", "1", "B", "5")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    assert!(service.list_records().is_empty());
}

#[test]
fn update_keeps_position_and_allows_roll_change() {
    let service = seeded();

    let updated = service
        .update_record("1", &input("Asha R", "9", "A+", "95"))
        .unwrap();

    assert_eq!(updated, Record::new("Asha R", "9", "A+", 95));
    assert_eq!(rolls(&service.list_records()), vec!["3", "9", "2"]);
}

#[test]
fn update_to_colliding_roll_is_rejected() {
    let service = seeded();
    let before = service.list_records();

    let err = service
        .update_record("1", &input("Asha", "2", "A", "90"))
        .unwrap_err();

    assert!(matches!(err, ServiceError::DuplicateRoll(ref roll) if roll == "2"));
    assert_eq!(service.list_records(), before);
}

#[test]
fn update_of_unknown_roll_is_not_found() {
    let service = seeded();

    let err = service
        .update_record("42", &input("X", "42", "A", "1"))
        .unwrap_err();

    assert!(matches!(err, ServiceError::RecordNotFound(_)));
}

#[test]
fn session_save_adds_then_edits_target() {
    let service = seeded();
    let mut session = Session::new();

    let outcome = service
        .save_from_session(&mut session, &input("Dev", "4", "C", "40"))
        .unwrap();
    assert_eq!(outcome, SaveOutcome::Added(Record::new("Dev", "4", "C", 40)));

    let current = service.begin_edit(&mut session, "4").unwrap();
    assert_eq!(current.name, "Dev");
    assert_eq!(session.edit_target(), Some("4"));

    let outcome = service
        .save_from_session(&mut session, &input("Dev K", "4", "B", "45"))
        .unwrap();
    assert_eq!(
        outcome,
        SaveOutcome::Updated(Record::new("Dev K", "4", "B", 45))
    );
    assert!(!session.is_editing());
    assert_eq!(service.list_records().len(), 4);
}

#[test]
fn failed_session_edit_keeps_edit_mode() {
    let service = seeded();
    let mut session = Session::new();
    service.begin_edit(&mut session, "3").unwrap();

    let err = service
        .save_from_session(&mut session, &input("Cara", "1", "B", "50"))
        .unwrap_err();

    assert!(matches!(err, ServiceError::DuplicateRoll(_)));
    assert_eq!(session.edit_target(), Some("3"));
}

#[test]
fn begin_edit_of_unknown_roll_leaves_session_untouched() {
    let service = seeded();
    let mut session = Session::new();

    assert!(service.begin_edit(&mut session, "nope").is_err());
    assert!(!session.is_editing());
}

#[test]
fn delete_removes_record_by_roll() {
    let service = seeded();

    let removed = service.delete_record("1").unwrap();

    assert_eq!(removed.name, "Asha");
    assert_eq!(rolls(&service.list_records()), vec!["3", "2"]);
    assert!(matches!(
        service.delete_record("1").unwrap_err(),
        ServiceError::RecordNotFound(_)
    ));
}

#[test]
fn sort_persists_new_order() {
    let service = seeded();

    let sorted = service.sort_by_marks(SortOrder::Ascending).unwrap();

    assert_eq!(rolls(&sorted), vec!["3", "2", "1"]);
    assert_eq!(service.list_records(), sorted);

    let by_roll = service.sort_by_roll(SortOrder::Descending).unwrap();
    assert_eq!(rolls(&by_roll), vec!["3", "2", "1"]);
}

#[test]
fn toggle_sorts_alternate_direction_across_both_keys() {
    let service = seeded();
    let mut session = Session::new();

    let first = service.toggle_sort_by_marks(&mut session).unwrap();
    assert_eq!(first.order, SortOrder::Ascending);
    assert_eq!(rolls(&first.records), vec!["3", "2", "1"]);

    let second = service.toggle_sort_by_roll(&mut session).unwrap();
    assert_eq!(second.order, SortOrder::Descending);
    assert_eq!(rolls(&second.records), vec!["3", "2", "1"]);

    let third = service.toggle_sort_by_marks(&mut session).unwrap();
    assert_eq!(third.order, SortOrder::Ascending);
}

#[test]
fn search_filters_stored_records() {
    let service = seeded();

    let hits = service.search("AS");

    assert_eq!(rolls(&hits), vec!["1"]);
    assert_eq!(service.search("").len(), 3);
}

#[test]
fn clear_all_empties_store() {
    let service = seeded();

    assert_eq!(service.clear_all().unwrap(), 3);
    assert!(service.list_records().is_empty());
    assert_eq!(
        service.repository().store().get_slot(RECORDS_SLOT_KEY).unwrap(),
        None
    );
    assert_eq!(service.clear_all().unwrap(), 0);
}

#[test]
fn import_merges_by_roll_and_reports_counts() {
    let service = seeded();
    let text = "name,roll,grade,marks\n\"A, Jr.\",1,B,70\nEli,5,A,88\nbad,row\n";

    let report = service.import_csv(text).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.updated, 1);
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped_rows, 1);
    let records = service.list_records();
    assert_eq!(rolls(&records), vec!["3", "1", "2", "5"]);
    assert_eq!(records[1], Record::new("A, Jr.", "1", "B", 70));
}

#[test]
fn importing_same_file_twice_is_idempotent() {
    let service = seeded();
    let text = "Eli,5,A,88\nAsha,1,A,91";

    service.import_csv(text).unwrap();
    let once = service.list_records();
    service.import_csv(text).unwrap();

    assert_eq!(service.list_records(), once);
}

#[test]
fn import_rejects_empty_or_fully_invalid_files() {
    let service = seeded();
    let before = service.list_records();

    assert!(matches!(
        service.import_csv("\n\n").unwrap_err(),
        ServiceError::EmptyImport
    ));
    assert!(matches!(
        service.import_csv("name,roll,grade,marks\nx,,A,1").unwrap_err(),
        ServiceError::NoValidRows { skipped_rows: 1 }
    ));
    assert_eq!(service.list_records(), before);
}

#[test]
fn export_requires_records() {
    let service = RecordService::new(MemorySlotStore::new());
    assert!(matches!(
        service.export_csv().unwrap_err(),
        ServiceError::NothingToExport
    ));

    service.add_record(&input("Asha", "1", "A", "90")).unwrap();
    assert_eq!(
        service.export_csv().unwrap(),
        "name,roll,grade,marks\n\"Asha\",\"1\",\"A\",\"90\""
    );
}

#[test]
fn corrupted_store_reads_as_empty_and_accepts_new_records() {
    let store = MemorySlotStore::new();
    store.set_slot(RECORDS_SLOT_KEY, "definitely not json").unwrap();
    let service = RecordService::new(&store);

    assert!(service.list_records().is_empty());
    service.add_record(&input("Asha", "1", "A", "90")).unwrap();
    assert_eq!(service.list_records().len(), 1);
}
