//! Application constants for the coordinate converter
//!
//! This module contains the well-known reference system codes, default
//! file locations, and table shape constants used throughout the
//! application.

// =============================================================================
// Reference Systems
// =============================================================================

/// EPSG codes offered in the selectable system list
pub const WELL_KNOWN_EPSG_CODES: &[u32] = &[32630, 4326, 2136];

/// Number of coordinate columns in every input and output row (x, y)
pub const COORDINATE_COLUMNS: usize = 2;

/// Full table width including the optional label column (X, Y, L)
pub const TABLE_COLUMNS: usize = 3;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default directory for intermediate files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Fixed intermediate path for the pre-transform export
pub const STAGING_FILENAME: &str = "data_to_be_transformed.csv";

/// Fixed path for the post-transform export
pub const TRANSFORMED_FILENAME: &str = "transformed.csv";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a human-readable description for a well-known EPSG code
pub fn system_description(code: u32) -> &'static str {
    match code {
        4326 => "WGS 84 (geographic, longitude/latitude)",
        32630 => "WGS 84 / UTM zone 30N (projected, metres)",
        2136 => "Accra / Ghana National Grid (projected, Gold Coast feet)",
        3857 => "WGS 84 / Pseudo-Mercator (projected, metres)",
        27700 => "OSGB36 / British National Grid (projected, metres)",
        4258 => "ETRS89 (geographic, longitude/latitude)",
        _ => "Unknown reference system",
    }
}

/// Check whether a code is in the selectable well-known list
pub fn is_well_known(code: u32) -> bool {
    WELL_KNOWN_EPSG_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_descriptions() {
        assert_eq!(
            system_description(4326),
            "WGS 84 (geographic, longitude/latitude)"
        );
        assert_eq!(
            system_description(32630),
            "WGS 84 / UTM zone 30N (projected, metres)"
        );
        assert_eq!(system_description(99999), "Unknown reference system");
    }

    #[test]
    fn test_well_known_codes() {
        assert!(is_well_known(4326));
        assert!(is_well_known(32630));
        assert!(is_well_known(2136));
        assert!(!is_well_known(3857));
    }
}
