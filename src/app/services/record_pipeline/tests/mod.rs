//! Tests for the record pipeline module
//!
//! Unit and integration tests for cleaning, parsing, summarizing and the
//! end-to-end pipeline.

pub mod cleaner_tests;
pub mod pipeline_tests;

// Test helper functions and fixtures
use crate::app::models::Product;

/// Build a raw record from string slices
pub fn raw(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Build a product for fixture data
pub fn product(code: &str, quantity: i64, bay: &str, shelf: i32) -> Product {
    Product::new(code, quantity, bay, shelf)
}

/// Clean rows from spec scenario A: two duplicate A1 slots and one B2 slot
pub fn scenario_a_rows() -> Vec<Vec<String>> {
    vec![
        raw(&["A1", "3", "B1 2"]),
        raw(&["A1", "5", "B1 2"]),
        raw(&["B2", "1", "A1 9"]),
    ]
}

/// Total quantity across a set of products
pub fn total_quantity(products: &[Product]) -> i64 {
    products.iter().map(|p| p.quantity).sum()
}
