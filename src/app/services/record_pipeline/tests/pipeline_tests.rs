//! End-to-end tests for the record pipeline

use std::io::Write;

use super::{product, total_quantity};
use crate::app::services::export::products_to_csv;
use crate::app::services::record_pipeline::process_reader;
use crate::cli::commands::process_file;
use crate::config::PipelineConfig;
use crate::Error;

const SAMPLE_CSV: &str = "\
code,quantity,location
A1,3,B1 2
A1,5,B1 2
B2,1,A1 9
";

#[test]
fn test_process_reader_end_to_end() {
    let config = PipelineConfig::default().without_output();

    let result = process_reader(SAMPLE_CSV.as_bytes(), &config).unwrap();

    assert_eq!(
        result.products,
        vec![product("B2", 1, "A1", 9), product("A1", 8, "B1", 2)]
    );
    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.data_rows, 3);
    assert_eq!(result.stats.rows_cleaned, 3);
    assert_eq!(result.stats.products_parsed, 3);
    assert_eq!(result.stats.products_summarized, 2);
    assert_eq!(result.stats.duplicates_merged(), 1);
}

#[test]
fn test_process_reader_skips_malformed_rows() {
    let input = "\
code,quantity,location
A1,3,B1 2
garbage row with no commas at all
B2,1,A1 9
";
    let config = PipelineConfig::default().without_output();

    let result = process_reader(input.as_bytes(), &config).unwrap();

    assert_eq!(result.products.len(), 2);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.skipped[0].index, 1);
    assert_eq!(total_quantity(&result.products), 4);
}

#[test]
fn test_process_reader_cleans_dirty_fields() {
    let input = "\
code,quantity,location
A#1!,3*,B1@ 2
";
    let config = PipelineConfig::default().without_output();

    let result = process_reader(input.as_bytes(), &config).unwrap();

    assert_eq!(result.products, vec![product("A1", 3, "B1", 2)]);
}

#[test]
fn test_process_reader_header_always_skipped_when_configured() {
    // Header-only input: the header is consumed even with zero data rows.
    let input = "code,quantity,location\n";
    let config = PipelineConfig::default().without_output();

    let result = process_reader(input.as_bytes(), &config).unwrap();

    assert!(result.products.is_empty());
    assert_eq!(result.stats.total_rows, 1);
    assert_eq!(result.stats.data_rows, 0);
}

#[test]
fn test_process_reader_no_header_keeps_first_row() {
    let input = "A1,3,B1 2\nB2,1,A1 9\n";
    let config = PipelineConfig::default().with_header(false).without_output();

    let result = process_reader(input.as_bytes(), &config).unwrap();

    assert_eq!(result.products.len(), 2);
    assert_eq!(total_quantity(&result.products), 4);
}

#[test]
fn test_process_reader_header_flag_drops_first_data_row_of_headerless_input() {
    // The documented hazard: claiming a header on headerless input loses the
    // first data row.
    let input = "A1,3,B1 2\nB2,1,A1 9\n";
    let config = PipelineConfig::default().without_output();

    let result = process_reader(input.as_bytes(), &config).unwrap();

    assert_eq!(result.products, vec![product("B2", 1, "A1", 9)]);
}

#[test]
fn test_process_reader_empty_input() {
    let config = PipelineConfig::default().without_output();

    let result = process_reader("".as_bytes(), &config).unwrap();

    assert!(result.products.is_empty());
    assert_eq!(result.stats.total_rows, 0);
}

#[test]
fn test_process_reader_parse_failure_cites_line() {
    let input = "\
code,quantity,location
A1,3,B1 2
A1,abc,B1 2
";
    let config = PipelineConfig::default().without_output();

    let err = process_reader(input.as_bytes(), &config).unwrap_err();

    assert!(matches!(err, Error::InvalidQuantity { line: 3, .. }));
}

#[test]
fn test_process_reader_no_partial_results_on_parse_failure() {
    let input = "\
code,quantity,location
A1,3,B1 2
A1,3,B1-2
";
    let config = PipelineConfig::default().without_output();

    let result = process_reader(input.as_bytes(), &config);

    assert!(matches!(result, Err(Error::InvalidLocation { line: 3, .. })));
}

#[test]
fn test_process_file_round_trip() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    input.write_all(SAMPLE_CSV.as_bytes()).unwrap();
    input.flush().unwrap();

    let config = PipelineConfig::default().without_output();
    let result = process_file(input.path(), &config).unwrap();

    assert_eq!(result.product_count(), 2);

    let csv = products_to_csv(&result.products).unwrap();
    assert_eq!(csv, "code,quantity,location\nB2,1,A1 9\nA1,8,B1 2\n");
}

#[test]
fn test_process_file_missing_input() {
    let config = PipelineConfig::default().without_output();

    let result = process_file(std::path::Path::new("/nonexistent/inventory.csv"), &config);

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_export_quotes_fields_when_needed() {
    // A comma surviving cleaning must not corrupt the output encoding.
    let products = vec![product("A1,", 3, "B1", 2)];

    let csv = products_to_csv(&products).unwrap();

    assert_eq!(csv, "code,quantity,location\n\"A1,\",3,B1 2\n");
}
