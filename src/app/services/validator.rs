//! Validation and filtering of parsed coordinate rows
//!
//! Applies the two-tier acceptance policy: rows with an empty first or
//! second cell are dropped silently, while a non-empty cell that fails
//! numeric parsing aborts the whole invocation. The invocation also fails
//! when no rows survive filtering.

use tracing::{debug, info};

use crate::app::models::{CoordinateRecord, RawRow};
use crate::{Error, Result};

/// Validate parsed rows into coordinate records, preserving order.
///
/// Silent drops and blocking failures are deliberately different tiers:
/// an incomplete row is not an error, a present-but-malformed cell is.
pub fn validate_rows(rows: &[RawRow]) -> Result<Vec<CoordinateRecord>> {
    if rows.is_empty() {
        return Err(Error::empty_input("no rows supplied"));
    }

    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let x_cell = row.x_cell().map(str::trim).unwrap_or("");
        let y_cell = row.y_cell().map(str::trim).unwrap_or("");

        // Incomplete rows are filtered, never reported
        if x_cell.is_empty() || y_cell.is_empty() {
            debug!("Row {} dropped: missing coordinate cell", index);
            dropped += 1;
            continue;
        }

        let x = parse_axis_cell(index, "x", x_cell)?;
        let y = parse_axis_cell(index, "y", y_cell)?;

        let label = row
            .label_cell()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        records.push(CoordinateRecord::new(x, y, label)?);
    }

    if records.is_empty() {
        return Err(Error::empty_input(format!(
            "all {} rows were incomplete",
            rows.len()
        )));
    }

    info!(
        "Validation complete: {} -> {} records ({} dropped)",
        rows.len(),
        records.len(),
        dropped
    );

    Ok(records)
}

/// Parse one non-empty axis cell, failing the invocation on malformed input
fn parse_axis_cell(index: usize, axis: &str, cell: &str) -> Result<f64> {
    cell.parse::<f64>().map_err(|_| {
        Error::invalid_coordinate(format!("row {}: {} cell '{}' is not a number", index, axis, cell))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        RawRow::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_valid_rows_pass_in_order() {
        let rows = vec![row(&["1.0", "2.0", ""]), row(&["3.0", "4.0", "b"])];
        let records = validate_rows(&rows).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!((records[0].x, records[0].y), (1.0, 2.0));
        assert_eq!((records[1].x, records[1].y), (3.0, 4.0));
        assert_eq!(records[1].label.as_deref(), Some("b"));
    }

    #[test]
    fn test_empty_cell_rows_are_dropped_silently() {
        let rows = vec![
            row(&["1.0", "2.0", ""]),
            row(&["", "5.0", ""]),
            row(&["3.0", "", ""]),
            row(&["3.0", "4.0", ""]),
        ];

        let records = validate_rows(&rows).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].x, records[0].y), (1.0, 2.0));
        assert_eq!((records[1].x, records[1].y), (3.0, 4.0));
    }

    #[test]
    fn test_non_numeric_cell_fails_whole_invocation() {
        let rows = vec![row(&["1.0", "2.0", ""]), row(&["abc", "4.0", ""])];
        let result = validate_rows(&rows);

        assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_no_rows_is_empty_input() {
        let result = validate_rows(&[]);
        assert!(matches!(result, Err(Error::EmptyInput { .. })));
    }

    #[test]
    fn test_all_rows_incomplete_is_empty_input() {
        let rows = vec![row(&["", "", ""]), row(&["", "5.0", ""])];
        let result = validate_rows(&rows);
        assert!(matches!(result, Err(Error::EmptyInput { .. })));
    }

    #[test]
    fn test_whitespace_cells_are_trimmed() {
        let rows = vec![row(&[" 1.5 ", "\t2.5", "  site "])];
        let records = validate_rows(&rows).unwrap();
        assert_eq!((records[0].x, records[0].y), (1.5, 2.5));
        assert_eq!(records[0].label.as_deref(), Some("site"));
    }
}
