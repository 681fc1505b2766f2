//! Configuration management for inventory processing.
//!
//! Provides the configuration structure passed explicitly to the pipeline
//! at construction time, replacing any implicit assumptions about the shape
//! of the input table.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_FILENAME;

/// Configuration for one pipeline invocation
///
/// The header flag is explicit: when `has_header` is true the first raw row
/// is consumed before cleaning begins, even if the table has zero data rows.
/// Callers with headerless input must clear the flag or the first data row
/// is silently lost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Treat the first row of the input as a header and skip it
    pub has_header: bool,

    /// Destination for the summarized CSV output
    pub output_path: PathBuf,

    /// Write the summarized CSV after processing
    pub write_output: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            write_output: true,
        }
    }
}

impl PipelineConfig {
    /// Create configuration with the header flag set
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Create configuration with a custom output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Disable writing the summarized CSV (in-memory results only)
    pub fn without_output(mut self) -> Self {
        self.write_output = false;
        self
    }
}
