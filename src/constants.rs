//! Application constants for the inventory processor
//!
//! This module contains the structural constants of the inventory record
//! format and default values used throughout the application.

// =============================================================================
// Record Format
// =============================================================================

/// Number of fields a record must have after cleaning: code, quantity, location
pub const CLEAN_FIELD_COUNT: usize = 3;

/// Field index of the product code within a clean record
pub const CODE_FIELD: usize = 0;

/// Field index of the quantity within a clean record
pub const QUANTITY_FIELD: usize = 1;

/// Field index of the location within a clean record
pub const LOCATION_FIELD: usize = 2;

/// Number of whitespace-delimited tokens in a valid location: bay, shelf
pub const LOCATION_TOKEN_COUNT: usize = 2;

// =============================================================================
// Defaults
// =============================================================================

/// Default filename for the summarized CSV output
pub const DEFAULT_OUTPUT_FILENAME: &str = "sorted_products.csv";

/// Column headers written to the summarized CSV output
pub const OUTPUT_HEADERS: &[&str] = &["code", "quantity", "location"];

/// Log target prefix used for the default env filter
pub const LOG_TARGET: &str = "inventory_processor";
