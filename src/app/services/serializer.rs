//! Serialization of transformed collections back to tabular form
//!
//! Flattens a transformed collection into ordered two-cell text rows,
//! one per geometry. No header row is ever emitted. Turning rows into a
//! file is a separate helper so the row serialization itself stays free
//! of side effects.

use std::path::Path;

use tracing::debug;

use crate::app::models::TransformedCollection;
use crate::{Error, Result};

/// Serialize a transformed collection into (x, y) text rows, input order
pub fn to_rows(collection: &TransformedCollection) -> Vec<Vec<String>> {
    let rows = collection
        .points
        .iter()
        .map(|point| vec![point.x.to_string(), point.y.to_string()])
        .collect::<Vec<_>>();

    debug!("Serialized {} rows in {}", rows.len(), collection.crs);
    rows
}

/// Write text rows to a CSV file at the given path, without a header.
///
/// The parent directory must already exist; choosing and preparing the
/// destination is the caller's concern.
pub fn write_rows(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to open output file",
                Some(e),
            )
        })?;

    for row in rows {
        writer.write_record(row).map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "failed to write row", Some(e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush {}", path.display()), e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{CrsId, PointGeometry};
    use tempfile::TempDir;

    #[test]
    fn test_two_cells_per_row_in_order() {
        let collection = TransformedCollection::new(
            vec![
                PointGeometry::new(500000.0, 0.0),
                PointGeometry::new(432167.25, 5789123.5),
            ],
            CrsId(32630),
        );

        let rows = to_rows(&collection);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["500000", "0"]);
        assert_eq!(rows[1], vec!["432167.25", "5789123.5"]);
    }

    #[test]
    fn test_empty_collection_serializes_to_no_rows() {
        let collection = TransformedCollection::new(vec![], CrsId(4326));
        assert!(to_rows(&collection).is_empty());
    }

    #[test]
    fn test_write_rows_emits_no_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let rows = vec![
            vec!["1.5".to_string(), "2.5".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ];
        write_rows(&path, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1.5,2.5\n3,4\n");
    }
}
