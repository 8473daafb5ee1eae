//! CSV import collaborator for the transform pipeline
//!
//! Reads a delimited file into fully materialized raw rows. The pipeline
//! expects rows of equal width, so short records are padded with empty
//! cells up to the table width here, at the boundary, not inside the
//! record parser.

use std::path::Path;

use tracing::debug;

use crate::constants::TABLE_COLUMNS;
use crate::{Error, Result};

/// Read a CSV file into raw text rows, padded to the table width.
///
/// No header row is expected or skipped; every line is data. Records
/// wider than the table keep their extra cells untouched.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to open input file",
                Some(e),
            )
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "failed to read row", Some(e))
        })?;

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        while cells.len() < TABLE_COLUMNS {
            cells.push(String::new());
        }
        rows.push(cells);
    }

    debug!("Imported {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
