//! Geometry construction from validated coordinate records
//!
//! Maps each (x, y) pair onto a point geometry in the declared source
//! reference system. The axis order is literal: x is always the first
//! axis and y the second, regardless of the convention the reference
//! system itself uses. Feeding axes in the right order is the caller's
//! responsibility.

use tracing::debug;

use crate::app::models::{CoordinateRecord, CrsId, GeometryCollection, PointGeometry};

/// Build a geometry collection from validated records.
///
/// Produces one point per record, same count and order. All points in
/// the returned collection share the given source reference system.
pub fn build_geometries(records: &[CoordinateRecord], source_crs: CrsId) -> GeometryCollection {
    let points = records
        .iter()
        .map(|record| PointGeometry::new(record.x, record.y))
        .collect::<Vec<_>>();

    debug!("Built {} point geometries in {}", points.len(), source_crs);
    GeometryCollection::new(points, source_crs)
}
