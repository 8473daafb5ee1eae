//! Record parsing for raw tabular input
//!
//! Turns raw delimited-text rows into ordered cell tuples. This stage is a
//! pure transformation: no numeric interpretation and no rejection happen
//! here (that is the validator's job), and short rows are not padded (the
//! importing collaborator pads to the table width before handing rows in).

use csv::StringRecord;
use tracing::debug;

use crate::app::models::RawRow;

/// Parse a single CSV record into a raw row of owned cells
pub fn parse_record(record: &StringRecord) -> RawRow {
    RawRow::new(record.iter().map(str::to_string).collect())
}

/// Parse a sequence of cell vectors into raw rows, preserving order
pub fn parse_cells(rows: &[Vec<String>]) -> Vec<RawRow> {
    let parsed: Vec<RawRow> = rows.iter().cloned().map(RawRow::new).collect();

    debug!("Parsed {} raw rows", parsed.len());
    parsed
}
