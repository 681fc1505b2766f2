//! CSV ingest for inventory tables
//!
//! Decodes a delimited-text byte stream into raw string rows. Decoding is
//! deliberately permissive: rows may have any field count and any content,
//! since validation belongs to the record pipeline, not the reader.

use std::io::Read;

use crate::Result;

/// Decode a byte stream into raw records
///
/// Rows are returned exactly as decoded, header included. Field counts are
/// not enforced here; the cleaner decides which rows survive.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record =
            result.map_err(|e| crate::Error::csv_decoding("failed to read CSV record", Some(e)))?;
        records.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(records)
}
