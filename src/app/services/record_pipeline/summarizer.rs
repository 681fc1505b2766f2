//! Aggregation and ordering for parsed inventory records
//!
//! Merges duplicate inventory slots by their composite (code, bay, shelf)
//! identity, summing quantities, and returns the result in canonical
//! (bay, shelf) order.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::app::models::Product;

/// Canonical slot ordering: bay lexicographic, then shelf numeric
fn compare_slots(a: &Product, b: &Product) -> Ordering {
    a.bay.cmp(&b.bay).then(a.shelf.cmp(&b.shelf))
}

/// Aggregate duplicate inventory slots and order the result
///
/// Products sharing an aggregation key are merged into one record whose
/// quantity is the sum of the group. The output is sorted by bay
/// (lexicographic) then shelf (numeric), so equal inputs always produce an
/// identical sequence regardless of map iteration order. Total function:
/// well-typed input cannot fail.
pub fn summarize(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(compare_slots);

    let input_count = products.len();
    let mut summary: HashMap<String, Product> = HashMap::new();
    for product in products {
        match summary.entry(product.aggregation_key()) {
            Entry::Occupied(mut slot) => slot.get_mut().quantity += product.quantity,
            Entry::Vacant(slot) => {
                slot.insert(product);
            }
        }
    }

    // HashMap iteration order is arbitrary; re-sort so equal inputs always
    // emit an identical sequence.
    let mut summarized: Vec<Product> = summary.into_values().collect();
    summarized.sort_by(compare_slots);

    debug!(
        "Summarized {} products into {} inventory slots",
        input_count,
        summarized.len()
    );

    summarized
}
