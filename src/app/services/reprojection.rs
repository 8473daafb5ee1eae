//! Reprojection of geometry collections between reference systems
//!
//! The engine delegates the projection math to proj4rs, a pure-Rust port
//! of PROJ. Its own responsibilities are the same-system rejection, the
//! invariant that the incoming collection is tagged with the declared
//! source system, the degree/radian convention at the authority boundary,
//! and turning any authority failure into a single aggregate error.

use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::{debug, info};

use crate::app::models::{CrsId, GeometryCollection, PointGeometry, TransformedCollection};
use crate::{Error, Result};

/// Resolution of EPSG codes to projection definitions.
///
/// proj4rs consumes proj-strings, not EPSG codes, so the engine carries a
/// registry of definitions for the systems it can initialise. Any code
/// outside the registry is reported as unsupported by the authority.
pub mod epsg {
    /// Get the proj-string definition for an EPSG code, if supported.
    ///
    /// WGS84 UTM zones are resolved parametrically (326xx north, 327xx
    /// south); the remaining systems come from a fixed table.
    pub fn proj_string(code: u32) -> Option<String> {
        match code {
            // WGS 84 geographic
            4326 => Some(
                "+proj=longlat +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +no_defs".to_string(),
            ),
            // ETRS89 geographic
            4258 => Some(
                "+proj=longlat +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +no_defs".to_string(),
            ),
            // WGS 84 / Pseudo-Mercator
            3857 => Some(
                "+proj=webmerc +lat_0=0 +lon_0=0 +x_0=0 +y_0=0 +ellps=WGS84 \
                 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs"
                    .to_string(),
            ),
            // Accra / Ghana National Grid (Gold Coast feet, War Office ellipsoid)
            2136 => Some(
                "+proj=tmerc +lat_0=4.666666666666667 +lon_0=-1 +k=0.99975 \
                 +x_0=274319.7391633579 +y_0=0 +a=6378300 +rf=296 \
                 +towgs84=-199,32,322,0,0,0,0 +to_meter=0.3047997101815088 +no_defs"
                    .to_string(),
            ),
            // OSGB36 / British National Grid
            27700 => Some(
                "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 \
                 +y_0=-100000 +ellps=airy \
                 +towgs84=446.448,-125.157,542.06,0.15,0.247,0.842,-20.489 \
                 +units=m +no_defs"
                    .to_string(),
            ),
            // WGS 84 / UTM northern zones
            32601..=32660 => Some(format!(
                "+proj=utm +zone={} +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
                code - 32600
            )),
            // WGS 84 / UTM southern zones
            32701..=32760 => Some(format!(
                "+proj=utm +zone={} +south +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
                code - 32700
            )),
            _ => None,
        }
    }

    /// Check whether a supported EPSG code denotes a geographic system
    /// (coordinates in degrees rather than projected units)
    pub fn is_geographic(code: u32) -> bool {
        matches!(code, 4326 | 4258)
    }
}

/// Reprojects point geometry collections between two reference systems.
///
/// Construction fails when source and target are the same system or when
/// either code cannot be initialised with the transform authority. A
/// constructed engine is reusable across collections.
pub struct ReprojectionEngine {
    source_crs: CrsId,
    target_crs: CrsId,
    source_proj: Proj,
    target_proj: Proj,
    source_is_geographic: bool,
    target_is_geographic: bool,
}

impl std::fmt::Debug for ReprojectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReprojectionEngine")
            .field("source_crs", &self.source_crs)
            .field("target_crs", &self.target_crs)
            .field("source_is_geographic", &self.source_is_geographic)
            .field("target_is_geographic", &self.target_is_geographic)
            .finish_non_exhaustive()
    }
}

impl ReprojectionEngine {
    /// Create an engine for a source/target system pair
    pub fn new(source_crs: CrsId, target_crs: CrsId) -> Result<Self> {
        if source_crs == target_crs {
            return Err(Error::identical_systems(source_crs, target_crs));
        }

        let source_proj = init_projection(source_crs)?;
        let target_proj = init_projection(target_crs)?;

        debug!(
            "Initialised reprojection engine {} -> {}",
            source_crs, target_crs
        );

        Ok(Self {
            source_crs,
            target_crs,
            source_proj,
            target_proj,
            source_is_geographic: epsg::is_geographic(source_crs.code()),
            target_is_geographic: epsg::is_geographic(target_crs.code()),
        })
    }

    /// The declared source reference system
    pub fn source_crs(&self) -> CrsId {
        self.source_crs
    }

    /// The declared target reference system
    pub fn target_crs(&self) -> CrsId {
        self.target_crs
    }

    /// Transform a whole collection from the source to the target system.
    ///
    /// The collection must be tagged with the engine's source system; any
    /// per-point failure aborts the call and nothing is returned.
    pub fn transform_collection(
        &self,
        collection: &GeometryCollection,
    ) -> Result<TransformedCollection> {
        if collection.crs != self.source_crs {
            return Err(Error::reprojection(format!(
                "geometry collection is tagged {} but the engine was built for source {}",
                collection.crs, self.source_crs
            )));
        }

        let mut transformed = Vec::with_capacity(collection.len());
        for point in &collection.points {
            transformed.push(self.transform_point(*point)?);
        }

        info!(
            "Reprojected {} points {} -> {}",
            transformed.len(),
            self.source_crs,
            self.target_crs
        );

        Ok(TransformedCollection::new(transformed, self.target_crs))
    }

    /// Transform a single point, handling the degree/radian convention.
    ///
    /// proj4rs works in radians for geographic systems.
    pub fn transform_point(&self, point: PointGeometry) -> Result<PointGeometry> {
        let (in_x, in_y) = if self.source_is_geographic {
            (point.x.to_radians(), point.y.to_radians())
        } else {
            (point.x, point.y)
        };

        let mut coords = (in_x, in_y, 0.0);
        transform(&self.source_proj, &self.target_proj, &mut coords).map_err(|e| {
            Error::reprojection(format!(
                "authority rejected point ({}, {}) for {} -> {}: {:?}",
                point.x, point.y, self.source_crs, self.target_crs, e
            ))
        })?;

        let (out_x, out_y) = if self.target_is_geographic {
            (coords.0.to_degrees(), coords.1.to_degrees())
        } else {
            (coords.0, coords.1)
        };

        if !out_x.is_finite() || !out_y.is_finite() {
            return Err(Error::reprojection(format!(
                "degenerate transform of ({}, {}) for {} -> {}",
                point.x, point.y, self.source_crs, self.target_crs
            )));
        }

        Ok(PointGeometry::new(out_x, out_y))
    }
}

/// Initialise a proj4rs projection for an EPSG code
fn init_projection(crs: CrsId) -> Result<Proj> {
    let definition = epsg::proj_string(crs.code())
        .ok_or_else(|| Error::reprojection(format!("{} is not supported", crs)))?;

    Proj::from_proj_string(&definition)
        .map_err(|e| Error::reprojection(format!("failed to initialise {}: {:?}", crs, e)))
}
