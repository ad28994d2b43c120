use rollbook_core::{filter_records, Record, RecordQuery};

fn sample() -> Vec<Record> {
    vec![
        Record::new("Asha Rao", "CS-101", "A", 91),
        Record::new("Ben Ng", "ME-202", "B", 64),
        Record::new("Cara Ash", "CS-303", "C", 55),
    ]
}

#[test]
fn query_matches_name_case_insensitively() {
    let hits = filter_records(&sample(), &RecordQuery::new("ASH"));

    let rolls: Vec<&str> = hits.iter().map(|r| r.roll.as_str()).collect();
    assert_eq!(rolls, vec!["CS-101", "CS-303"]);
}

#[test]
fn query_matches_roll_substring() {
    let hits = filter_records(&sample(), &RecordQuery::new("me-2"));

    assert_eq!(hits, vec![sample()[1].clone()]);
}

#[test]
fn empty_query_matches_everything_in_order() {
    let query = RecordQuery::new("");

    assert!(query.is_empty());
    assert_eq!(filter_records(&sample(), &query), sample());
}

#[test]
fn query_with_no_match_is_empty() {
    assert!(filter_records(&sample(), &RecordQuery::new("zz")).is_empty());
}

#[test]
fn query_does_not_search_grade_or_marks() {
    assert!(filter_records(&sample(), &RecordQuery::new("91")).is_empty());
}
