//! Record processing pipeline for inventory tables
//!
//! This module provides the complete pipeline that turns a raw inventory
//! byte stream into an ordered, summarized set of products.
//!
//! # Architecture
//!
//! The pipeline is organized into logical components:
//! - [`cleaner`] - Character filtering and three-field row validation
//! - [`parser`] - Clean rows to typed products, location decomposition
//! - [`summarizer`] - Key-based aggregation and canonical ordering
//! - [`stats`] - Pipeline statistics and skip diagnostics
//!
//! # Processing Pipeline
//!
//! The stages run sequentially in one pass per invocation:
//!
//! 1. **Decode**: read raw rows from the input stream (flexible field counts)
//! 2. **Header skip**: drop the first row when configured
//! 3. **Clean**: filter characters, elide empty fields, keep three-field rows
//! 4. **Parse**: build typed products, aborting on the first bad record
//! 5. **Summarize**: merge duplicate slots, order by (bay, shelf)
//!
//! # Failure Policy
//!
//! Two distinct policies coexist on purpose. The cleaner tolerates bad rows,
//! dropping and reporting them while the batch continues. The parser is
//! strict: its first structurally invalid record aborts the invocation with
//! a line-numbered error and no partial results.

pub mod cleaner;
pub mod parser;
pub mod stats;
pub mod summarizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cleaner::{clean_records, CleaningOutcome};
pub use parser::parse_records;
pub use stats::{PipelineStats, SkippedRecord};
pub use summarizer::summarize;

use std::io::Read;

use tracing::{debug, info};

use crate::app::models::Product;
use crate::app::services::ingest::read_raw_records;
use crate::config::PipelineConfig;
use crate::Result;

/// Result of one pipeline invocation
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Summarized products in canonical (bay, shelf) order
    pub products: Vec<Product>,
    /// Stage counters and skip diagnostics
    pub stats: PipelineStats,
}

impl PipelineResult {
    /// Number of summarized products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}

/// Run the full pipeline over a byte stream
///
/// Decodes the stream as delimited text, skips the header row when the
/// configuration says one is present, then cleans, parses and summarizes.
/// The caller owns the stream and closes it after this returns, on success
/// or failure alike.
pub fn process_reader<R: Read>(reader: R, config: &PipelineConfig) -> Result<PipelineResult> {
    let mut stats = PipelineStats::new();

    let mut records = read_raw_records(reader)?;
    stats.total_rows = records.len();
    debug!("Decoded {} raw rows", stats.total_rows);

    // Explicit header handling: the flag, not the data, decides.
    if config.has_header && !records.is_empty() {
        records.remove(0);
    }
    stats.data_rows = records.len();

    let outcome = clean_records(records);
    stats.rows_cleaned = outcome.records.len();
    for skip in outcome.skipped {
        stats.add_skip(skip);
    }

    let first_line = if config.has_header { 2 } else { 1 };
    let products = parse_records(&outcome.records, first_line)?;
    stats.products_parsed = products.len();

    let summarized = summarize(products);
    stats.products_summarized = summarized.len();

    info!("{}", stats.summary());

    Ok(PipelineResult {
        products: summarized,
        stats,
    })
}
