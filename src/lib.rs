//! Inventory Processor Library
//!
//! A Rust library for cleaning, validating and summarizing warehouse
//! inventory data supplied as delimited text.
//!
//! This library provides tools for:
//! - Filtering raw rows down to validated three-field records
//! - Parsing records into typed products with decomposed bay/shelf locations
//! - Aggregating duplicate inventory slots with quantity summation
//! - Producing a canonical (bay, shelf) ordering for display and export
//! - Structured skip diagnostics for malformed rows

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export;
        pub mod ingest;
        pub mod record_pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Product;
pub use app::services::record_pipeline::{PipelineResult, PipelineStats};
pub use config::PipelineConfig;

/// Result type alias for the inventory processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for inventory processing operations
///
/// The parse variants carry the 1-based line number of the offending record,
/// counting a consumed header row as line 1, so callers can report an
/// actionable message.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error in the input stream
    #[error("CSV decoding error: {message}")]
    CsvDecoding {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// CSV encoding error while writing output
    #[error("CSV encoding error: {message}")]
    CsvEncoding {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A clean record did not contain exactly the expected field count
    #[error("invalid record on line {line}: expected 3 fields, found {found}")]
    InvalidRecord { line: usize, found: usize },

    /// Quantity field could not be parsed as an integer
    #[error("invalid quantity '{value}' on line {line}")]
    InvalidQuantity {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Location field did not split into a bay designator and shelf number
    #[error("invalid location format '{value}' on line {line}: expected '<bay> <shelf>'")]
    InvalidLocation { line: usize, value: String },

    /// Shelf token of the location field could not be parsed as an integer
    #[error("invalid shelf '{value}' on line {line}")]
    InvalidShelf {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV decoding error with context
    pub fn csv_decoding(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvDecoding {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV encoding error with context
    pub fn csv_encoding(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvEncoding {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid-record error for a wrong field count
    pub fn invalid_record(line: usize, found: usize) -> Self {
        Self::InvalidRecord { line, found }
    }

    /// Create an invalid-quantity error
    pub fn invalid_quantity(
        line: usize,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::InvalidQuantity {
            line,
            value: value.into(),
            source,
        }
    }

    /// Create an invalid-location error
    pub fn invalid_location(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidLocation {
            line,
            value: value.into(),
        }
    }

    /// Create an invalid-shelf error
    pub fn invalid_shelf(
        line: usize,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::InvalidShelf {
            line,
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the parse-family errors that abort a batch
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecord { .. }
                | Self::InvalidQuantity { .. }
                | Self::InvalidLocation { .. }
                | Self::InvalidShelf { .. }
        )
    }

    /// Line number carried by parse-family errors, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { line, .. }
            | Self::InvalidQuantity { line, .. }
            | Self::InvalidLocation { line, .. }
            | Self::InvalidShelf { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvDecoding {
            message: "CSV decoding failed".to_string(),
            source: Some(error),
        }
    }
}
