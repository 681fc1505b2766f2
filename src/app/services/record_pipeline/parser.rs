//! Record parsing for cleaned inventory rows
//!
//! Converts clean three-field rows into typed [`Product`] records,
//! decomposing the composite location field into a bay designator and a
//! shelf index. Parsing is all-or-nothing: the first malformed record aborts
//! the whole batch with a line-numbered error. This strictness is deliberate
//! and asymmetric with the tolerant cleaner: a row that survived cleaning
//! but still fails to parse points at a structural problem worth surfacing,
//! not noise worth dropping.

use crate::app::models::Product;
use crate::constants::{
    CLEAN_FIELD_COUNT, CODE_FIELD, LOCATION_FIELD, LOCATION_TOKEN_COUNT, QUANTITY_FIELD,
};
use crate::{Error, Result};

/// Parse cleaned records into typed products, preserving input order
///
/// `first_line` is the 1-based source line number of the first record, so
/// errors can cite the offending line: 2 when a header row was consumed
/// (the header counts as line 1), 1 otherwise. Cleaning may have dropped
/// rows before this point, so the number indexes the cleaned sequence.
pub fn parse_records(records: &[Vec<String>], first_line: usize) -> Result<Vec<Product>> {
    let mut products = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let line = first_line + i;
        products.push(parse_record(record, line)?);
    }

    Ok(products)
}

/// Parse one clean record into a product
fn parse_record(record: &[String], line: usize) -> Result<Product> {
    // Cleaning guarantees three fields, but the parser contract stands on
    // its own and re-checks.
    if record.len() != CLEAN_FIELD_COUNT {
        return Err(Error::invalid_record(line, record.len()));
    }

    let quantity: i64 = record[QUANTITY_FIELD]
        .parse()
        .map_err(|e| Error::invalid_quantity(line, &record[QUANTITY_FIELD], e))?;

    let (bay, shelf) = parse_location(&record[LOCATION_FIELD], line)?;

    Ok(Product::new(record[CODE_FIELD].clone(), quantity, bay, shelf))
}

/// Decompose a location field (e.g., "A3 5") into bay and shelf
fn parse_location(location: &str, line: usize) -> Result<(String, i32)> {
    let tokens: Vec<&str> = location.split_whitespace().collect();
    if tokens.len() != LOCATION_TOKEN_COUNT {
        return Err(Error::invalid_location(line, location));
    }

    let shelf: i32 = tokens[1]
        .parse()
        .map_err(|e| Error::invalid_shelf(line, tokens[1], e))?;

    Ok((tokens[0].to_string(), shelf))
}
