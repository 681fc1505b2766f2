//! Record cleaning for raw inventory rows
//!
//! Filters each field down to letters, digits, whitespace and commas, elides
//! fields that end up empty, and keeps only rows that land on exactly three
//! fields. Malformed rows are dropped and reported, never fatal: cleaning is
//! tolerant at the row level by design, in contrast to the strict parser
//! that follows it.

use tracing::{debug, warn};

use super::stats::SkippedRecord;
use crate::constants::CLEAN_FIELD_COUNT;

/// Outcome of cleaning a batch of raw rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningOutcome {
    /// Rows that survived with exactly three non-empty fields, input order
    pub records: Vec<Vec<String>>,
    /// Structured diagnostics for every dropped row, input order
    pub skipped: Vec<SkippedRecord>,
}

/// True for characters allowed to survive field filtering
///
/// Letters, digits, whitespace and the comma separator; everything else is
/// stripped from field content.
fn is_valid_character(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || c == ','
}

/// Filter one raw field, returning `None` if nothing useful remains
///
/// Invalid characters are removed and the result trimmed; an empty result
/// elides the field from the row entirely, which can shift the positions of
/// later fields.
fn clean_field(field: &str) -> Option<String> {
    let filtered: String = field.chars().filter(|c| is_valid_character(*c)).collect();
    let trimmed = filtered.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Clean a batch of raw rows into validated three-field records
///
/// Each field is character-filtered and trimmed; empty fields are elided.
/// A row is kept only if exactly three fields survive. Dropped rows are
/// reported through the returned [`SkippedRecord`] list and a `warn!`
/// diagnostic; they never fail the batch.
pub fn clean_records(records: Vec<Vec<String>>) -> CleaningOutcome {
    let mut outcome = CleaningOutcome::default();

    for (index, record) in records.into_iter().enumerate() {
        let cleaned: Vec<String> = record
            .iter()
            .filter_map(|field| clean_field(field))
            .collect();

        if cleaned.len() == CLEAN_FIELD_COUNT {
            outcome.records.push(cleaned);
        } else {
            let skip = SkippedRecord {
                index,
                surviving_fields: cleaned.len(),
                raw_fields: record,
            };
            warn!("{}", skip.notice());
            outcome.skipped.push(skip);
        }
    }

    debug!(
        "Cleaned {} records, skipped {}",
        outcome.records.len(),
        outcome.skipped.len()
    );

    outcome
}
