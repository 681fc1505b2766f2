//! Processing statistics and skip diagnostics for the record pipeline
//!
//! This module provides types for tracking how many records each pipeline
//! stage consumed and produced, and a structured record of every row the
//! cleaner dropped so callers can log, count, or ignore skips as they choose.

/// A raw row dropped by the cleaner, with enough context to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 0-based position of the row within the data section (after any header)
    pub index: usize,
    /// The original raw fields, before character filtering
    pub raw_fields: Vec<String>,
    /// Number of fields that survived filtering (anything but 3)
    pub surviving_fields: usize,
}

impl SkippedRecord {
    /// Human-readable skip notice for diagnostics
    pub fn notice(&self) -> String {
        format!(
            "skipping malformed record {}: {:?} ({} fields after cleaning)",
            self.index, self.raw_fields, self.surviving_fields
        )
    }
}

/// Statistics for one pipeline invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Total raw rows decoded from the input, header included
    pub total_rows: usize,
    /// Rows in the data section (after optional header skip)
    pub data_rows: usize,
    /// Rows that survived cleaning with exactly three fields
    pub rows_cleaned: usize,
    /// Rows dropped by the cleaner
    pub rows_skipped: usize,
    /// Skip diagnostics, one per dropped row, in input order
    pub skipped: Vec<SkippedRecord>,
    /// Typed products produced by the parser
    pub products_parsed: usize,
    /// Products remaining after aggregation
    pub products_summarized: usize,
}

impl PipelineStats {
    /// Create new empty pipeline statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped row
    pub fn add_skip(&mut self, skip: SkippedRecord) {
        self.rows_skipped += 1;
        self.skipped.push(skip);
    }

    /// Number of duplicate entries merged during aggregation
    pub fn duplicates_merged(&self) -> usize {
        self.products_parsed.saturating_sub(self.products_summarized)
    }

    /// Fraction of data rows that survived cleaning, as a percentage
    pub fn clean_rate(&self) -> f64 {
        if self.data_rows == 0 {
            100.0
        } else {
            (self.rows_cleaned as f64 / self.data_rows as f64) * 100.0
        }
    }

    /// Get summary of pipeline statistics for logging
    pub fn summary(&self) -> String {
        format!(
            "Pipeline summary: {} data rows -> {} cleaned ({:.1}%) -> {} products \
             -> {} summarized | skipped: {} | duplicates merged: {}",
            self.data_rows,
            self.rows_cleaned,
            self.clean_rate(),
            self.products_parsed,
            self.products_summarized,
            self.rows_skipped,
            self.duplicates_merged()
        )
    }
}
