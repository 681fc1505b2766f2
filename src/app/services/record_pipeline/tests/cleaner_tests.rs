//! Tests for record cleaning functionality

use super::raw;
use crate::app::services::record_pipeline::cleaner::clean_records;

#[test]
fn test_clean_valid_rows_pass_through() {
    let rows = vec![raw(&["A1", "3", "B1 2"]), raw(&["B2", "1", "A1 9"])];

    let outcome = clean_records(rows.clone());

    assert_eq!(outcome.records, rows);
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_clean_strips_invalid_characters() {
    let rows = vec![raw(&["A#1!", "3*", "B1@ 2"])];

    let outcome = clean_records(rows);

    assert_eq!(outcome.records, vec![raw(&["A1", "3", "B1 2"])]);
}

#[test]
fn test_clean_preserves_commas_in_fields() {
    // The character predicate keeps commas: "A#1!," filters to "A1,".
    let rows = vec![raw(&["A#1!,", "3", "B1 2"])];

    let outcome = clean_records(rows);

    assert_eq!(outcome.records, vec![raw(&["A1,", "3", "B1 2"])]);
}

#[test]
fn test_clean_trims_whitespace() {
    let rows = vec![raw(&["  A1  ", " 3", "B1 2  "])];

    let outcome = clean_records(rows);

    assert_eq!(outcome.records, vec![raw(&["A1", "3", "B1 2"])]);
}

#[test]
fn test_clean_drops_rows_with_too_few_fields() {
    let rows = vec![raw(&["A1", "3"])];

    let outcome = clean_records(rows);

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].index, 0);
    assert_eq!(outcome.skipped[0].surviving_fields, 2);
    assert_eq!(outcome.skipped[0].raw_fields, raw(&["A1", "3"]));
}

#[test]
fn test_clean_drops_rows_with_too_many_fields() {
    let rows = vec![raw(&["A1", "3", "B1 2", "extra"])];

    let outcome = clean_records(rows);

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.skipped[0].surviving_fields, 4);
}

#[test]
fn test_clean_retains_four_field_row_with_one_empty_field() {
    // Scenario E: a field that filters to empty is elided, landing the row
    // on exactly three surviving fields.
    let rows = vec![raw(&["A1", "", "3", "B1 2"])];

    let outcome = clean_records(rows);

    assert_eq!(outcome.records, vec![raw(&["A1", "3", "B1 2"])]);
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_clean_elides_field_of_only_punctuation() {
    // "#!*" filters to nothing, shifting later fields left.
    let rows = vec![raw(&["A1", "#!*", "3", "B1 2"])];

    let outcome = clean_records(rows);

    assert_eq!(outcome.records, vec![raw(&["A1", "3", "B1 2"])]);
}

#[test]
fn test_clean_continues_past_malformed_rows() {
    let rows = vec![
        raw(&["A1", "3", "B1 2"]),
        raw(&["bad row"]),
        raw(&["B2", "1", "A1 9"]),
    ];

    let outcome = clean_records(rows);

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].index, 1);
}

#[test]
fn test_clean_is_idempotent() {
    let rows = vec![
        raw(&["A#1!", "3", "B1 2"]),
        raw(&["no good"]),
        raw(&["B2", "1 ", "A1 9"]),
    ];

    let once = clean_records(rows);
    let twice = clean_records(once.records.clone());

    assert_eq!(twice.records, once.records);
    assert!(twice.skipped.is_empty());
}

#[test]
fn test_clean_never_grows_the_batch() {
    let rows = vec![
        raw(&["A1", "3", "B1 2"]),
        raw(&["only two", "fields"]),
        raw(&["###", "!!!", "..."]),
        raw(&["B2", "1", "A1 9"]),
    ];
    let input_len = rows.len();

    let outcome = clean_records(rows);

    assert!(outcome.records.len() <= input_len);
    assert_eq!(outcome.records.len() + outcome.skipped.len(), input_len);
}

#[test]
fn test_clean_empty_input() {
    let outcome = clean_records(Vec::new());

    assert!(outcome.records.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_skip_notice_names_the_raw_row() {
    let rows = vec![raw(&["A1", "3"])];

    let outcome = clean_records(rows);

    let notice = outcome.skipped[0].notice();
    assert!(notice.contains("A1"));
    assert!(notice.contains("2 fields"));
}
