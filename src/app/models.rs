//! Data models for coordinate conversion
//!
//! This module contains the core data structures for representing raw
//! tabular rows, validated coordinate records, point geometries, and the
//! reference system identifiers that drive reprojection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

// =============================================================================
// Reference System Identifier
// =============================================================================

/// An EPSG integer code identifying a coordinate reference system.
///
/// The code is treated as an opaque identifier: equality drives the
/// same-system rejection, and the external transform authority decides
/// whether a code is actually supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrsId(pub u32);

impl CrsId {
    /// The raw EPSG code
    pub fn code(&self) -> u32 {
        self.0
    }

    /// Identifier in the form the transform authority expects ("epsg:4326")
    pub fn authority_code(&self) -> String {
        format!("epsg:{}", self.0)
    }
}

impl fmt::Display for CrsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

impl FromStr for CrsId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("EPSG:")
            .or_else(|| trimmed.strip_prefix("epsg:"))
            .unwrap_or(trimmed);

        digits
            .parse::<u32>()
            .map(CrsId)
            .map_err(|_| Error::configuration(format!("Invalid EPSG code: '{}'", s)))
    }
}

impl From<u32> for CrsId {
    fn from(code: u32) -> Self {
        CrsId(code)
    }
}

// =============================================================================
// Raw Tabular Rows
// =============================================================================

/// One raw text row as handed over by the display/import surface.
///
/// Cells are untyped strings in column order (x, y, optional label).
/// Rows are produced by the record parser and consumed by the validator;
/// no numeric interpretation happens at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell holding the first-axis value, if present
    pub fn x_cell(&self) -> Option<&str> {
        self.cells.first().map(String::as_str)
    }

    /// Cell holding the second-axis value, if present
    pub fn y_cell(&self) -> Option<&str> {
        self.cells.get(1).map(String::as_str)
    }

    /// Optional label cell carried through unmodified
    pub fn label_cell(&self) -> Option<&str> {
        self.cells.get(2).map(String::as_str)
    }

    /// True when every cell is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.trim().is_empty())
    }
}

// =============================================================================
// Validated Coordinate Records
// =============================================================================

/// A validated coordinate pair with an optional label.
///
/// Created once at the validator boundary; immutable afterwards. Invalid
/// rows are dropped or rejected before a record is ever built, so every
/// record holds two finite numeric axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    /// First-axis value (longitude or easting, per the caller's convention)
    pub x: f64,

    /// Second-axis value (latitude or northing, per the caller's convention)
    pub y: f64,

    /// Optional label carried through unmodified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CoordinateRecord {
    /// Create a new record, rejecting non-finite axis values
    pub fn new(x: f64, y: f64, label: Option<String>) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::invalid_coordinate(format!(
                "coordinate values must be finite, got ({}, {})",
                x, y
            )));
        }

        Ok(Self { x, y, label })
    }
}

// =============================================================================
// Geometries
// =============================================================================

/// A point location in some reference system.
///
/// The reference system is not stored on the point itself; it is tracked
/// on the collection the point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub x: f64,
    pub y: f64,
}

impl PointGeometry {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered set of point geometries sharing one source reference system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub points: Vec<PointGeometry>,
    /// Reference system all points are currently expressed in
    pub crs: CrsId,
}

impl GeometryCollection {
    pub fn new(points: Vec<PointGeometry>, crs: CrsId) -> Self {
        Self { points, crs }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The result of one reprojection: transformed points paired with the
/// destination reference system. One outstanding result at a time; a new
/// transform supersedes the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedCollection {
    pub points: Vec<PointGeometry>,
    /// Reference system the points are now expressed in
    pub crs: CrsId,
}

impl TransformedCollection {
    pub fn new(points: Vec<PointGeometry>, crs: CrsId) -> Self {
        Self { points, crs }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
