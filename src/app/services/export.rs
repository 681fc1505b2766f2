//! CSV export for summarized inventory
//!
//! Re-encodes summarized products as delimited text with a
//! `code,quantity,location` header, for persistence and download serving.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::app::models::Product;
use crate::constants::OUTPUT_HEADERS;
use crate::{Error, Result};

/// Encode products as CSV into any writer
pub fn write_products<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(OUTPUT_HEADERS)
        .map_err(|e| Error::csv_encoding("failed to write CSV header", Some(e)))?;

    for product in products {
        let quantity = product.quantity.to_string();
        let location = product.location();
        csv_writer
            .write_record([product.code.as_str(), quantity.as_str(), location.as_str()])
            .map_err(|e| Error::csv_encoding("failed to write CSV record", Some(e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("failed to flush CSV output", e))?;

    Ok(())
}

/// Write the summarized CSV to a file path
pub fn write_products_file(path: &Path, products: &[Product]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;

    write_products(file, products)?;

    info!("Wrote {} products to {}", products.len(), path.display());
    Ok(())
}

/// Encode products as an in-memory CSV string
pub fn products_to_csv(products: &[Product]) -> Result<String> {
    let mut buffer = Vec::new();
    write_products(&mut buffer, products)?;
    String::from_utf8(buffer)
        .map_err(|_| Error::csv_encoding("CSV output was not valid UTF-8", None))
}
