//! Data models for inventory processing
//!
//! This module contains the core data structures for representing warehouse
//! inventory records after parsing and aggregation.

use serde::{Deserialize, Serialize};

/// A typed inventory record: one product at one warehouse location
///
/// Created by the record parser from a clean three-field row. The composite
/// location field is decomposed into a bay designator and a numeric shelf
/// index. Quantity is parsed but not sign-validated; negative adjustments
/// pass through and sum like any other entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code (e.g., "A1", "CD21")
    pub code: String,

    /// Stock quantity at this location
    pub quantity: i64,

    /// Warehouse storage bay identifier (e.g., "B1")
    pub bay: String,

    /// Shelf index within the bay
    pub shelf: i32,
}

impl Product {
    /// Create a new product record
    pub fn new(code: impl Into<String>, quantity: i64, bay: impl Into<String>, shelf: i32) -> Self {
        Self {
            code: code.into(),
            quantity,
            bay: bay.into(),
            shelf,
        }
    }

    /// Composite identity used to merge duplicate inventory slots
    ///
    /// Two products with equal keys refer to the same (code, bay, shelf)
    /// triple and have their quantities summed during aggregation.
    pub fn aggregation_key(&self) -> String {
        format!("{},{} {}", self.code, self.bay, self.shelf)
    }

    /// Recompose the location field as it appears in the source table
    pub fn location(&self) -> String {
        format!("{} {}", self.bay, self.shelf)
    }
}
