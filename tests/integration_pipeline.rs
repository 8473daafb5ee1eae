//! Integration tests for the coordinate transform pipeline
//!
//! These tests exercise the whole pipeline end to end: CSV import,
//! validation, geometry building, reprojection, and the exported output
//! files, with the intermediate paths redirected to temporary locations.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use coord_converter::app::models::CrsId;
use coord_converter::cli::input;
use coord_converter::pipeline::Pipeline;
use coord_converter::{Config, Error};

/// Build a pipeline whose data directory lives under the given temp dir
fn pipeline_in(temp_dir: &TempDir) -> Pipeline {
    Pipeline::new(Config::default().with_data_dir(temp_dir.path().join("data")))
}

/// Write an input CSV and return its path
fn write_input(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("input.csv");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "{}", contents).unwrap();
    path
}

/// Purpose: validate the row-count and ordering property for all-valid input
/// Benefit: ensures nothing is dropped or reordered along the happy path
#[test]
fn test_all_valid_rows_preserve_count_and_order() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "-3.0,50.0\n-2.0,51.0\n-1.0,52.0\n");

    let rows = input::read_rows(&input_path).unwrap();
    let pipeline = pipeline_in(&temp_dir);
    let outcome = pipeline.run(&rows, CrsId(4326), CrsId(32630)).unwrap();

    assert_eq!(outcome.stats.rows_in, 3);
    assert_eq!(outcome.stats.rows_out, 3);
    assert_eq!(outcome.rows.len(), 3);

    // Eastings must increase with longitude, proving order was kept
    let eastings: Vec<f64> = outcome
        .collection
        .points
        .iter()
        .map(|point| point.x)
        .collect();
    assert!(eastings[0] < eastings[1]);
    assert!(eastings[1] < eastings[2]);
}

/// Purpose: validate the spec example with a dropped incomplete row
/// Benefit: pins the silent-drop policy at the pipeline boundary
#[test]
fn test_incomplete_row_dropped_silently() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "1.0,2.0\n,5.0\n3.0,4.0\n");

    let rows = input::read_rows(&input_path).unwrap();
    let pipeline = pipeline_in(&temp_dir);
    let outcome = pipeline.run(&rows, CrsId(4326), CrsId(32630)).unwrap();

    assert_eq!(outcome.stats.rows_in, 3);
    assert_eq!(outcome.stats.rows_dropped, 1);
    assert_eq!(outcome.rows.len(), 2);
}

/// Purpose: validate the round-trip property through forward and inverse transforms
/// Benefit: confirms the engine drives the authority consistently in both directions
#[test]
fn test_round_trip_within_tolerance() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "-1.5,52.25\n-3.2,55.9\n");
    let rows = input::read_rows(&input_path).unwrap();

    let forward = pipeline_in(&temp_dir);
    let projected = forward.run(&rows, CrsId(4326), CrsId(32630)).unwrap();

    let back_rows: Vec<Vec<String>> = projected
        .rows
        .iter()
        .map(|row| vec![row[0].clone(), row[1].clone(), String::new()])
        .collect();

    let inverse = pipeline_in(&temp_dir);
    let recovered = inverse.run(&back_rows, CrsId(32630), CrsId(4326)).unwrap();

    let originals = [(-1.5, 52.25), (-3.2, 55.9)];
    for (point, (lon, lat)) in recovered.collection.points.iter().zip(originals) {
        assert_abs_diff_eq!(point.x, lon, epsilon = 1e-6);
        assert_abs_diff_eq!(point.y, lat, epsilon = 1e-6);
    }
}

/// Purpose: validate the identical-system rejection and its no-op guarantee
/// Benefit: a failed request must never disturb previously published output
#[test]
fn test_identical_systems_is_rejected_and_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "1.0,2.0\n");
    let rows = input::read_rows(&input_path).unwrap();

    let pipeline = pipeline_in(&temp_dir);
    pipeline.run(&rows, CrsId(4326), CrsId(32630)).unwrap();
    let previous = fs::read_to_string(pipeline.config().transformed_path()).unwrap();

    let again_path = write_input(&temp_dir, "10,20\n");
    let again = input::read_rows(&again_path).unwrap();
    let result = pipeline.run(&again, CrsId(32630), CrsId(32630));

    match result {
        Err(Error::IdenticalSystems {
            source_crs,
            target_crs,
        }) => {
            assert_eq!(source_crs, CrsId(32630));
            assert_eq!(target_crs, CrsId(32630));
        }
        other => panic!("expected IdenticalSystems, got {:?}", other),
    }

    let current = fs::read_to_string(pipeline.config().transformed_path()).unwrap();
    assert_eq!(current, previous);
}

/// Purpose: validate the empty-input guard ahead of the reprojection engine
/// Benefit: an empty table must fail fast, even for an identical-system pair
#[test]
fn test_empty_input_fails_before_engine() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "");
    let rows = input::read_rows(&input_path).unwrap();

    let pipeline = pipeline_in(&temp_dir);

    // Identical systems would also be an error, but emptiness wins because
    // the pipeline never reaches the engine.
    let result = pipeline.run(&rows, CrsId(4326), CrsId(4326));
    assert!(matches!(result, Err(Error::EmptyInput { .. })));
    assert!(!pipeline.config().transformed_path().exists());
}

/// Purpose: validate the blocking failure on a non-numeric coordinate cell
/// Benefit: pins the two-tier policy's hard-error branch end to end
#[test]
fn test_non_numeric_cell_aborts_invocation() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "1.0,2.0\nabc,4.0\n");
    let rows = input::read_rows(&input_path).unwrap();

    let pipeline = pipeline_in(&temp_dir);
    let result = pipeline.run(&rows, CrsId(4326), CrsId(32630));

    assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));
    assert!(!pipeline.config().transformed_path().exists());
}

/// Purpose: validate the exported file format bit for bit
/// Benefit: the export contract is N rows of "<x>,<y>" with no header
#[test]
fn test_export_format_has_no_header() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "-3.0,0.0\n");
    let rows = input::read_rows(&input_path).unwrap();

    let pipeline = pipeline_in(&temp_dir);
    pipeline.run(&rows, CrsId(4326), CrsId(32630)).unwrap();

    let contents = fs::read_to_string(pipeline.config().transformed_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let cells: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(cells.len(), 2);

    // The zone 30 central meridian on the equator is easting 500000
    let x: f64 = cells[0].parse().unwrap();
    let y: f64 = cells[1].parse().unwrap();
    assert_abs_diff_eq!(x, 500_000.0, epsilon = 1e-3);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-3);
}

/// Purpose: validate that every well-known selectable system transforms
/// Benefit: the three combo-box codes of the original tool all keep working
#[test]
fn test_well_known_systems_are_transformable() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "-1.0,5.5\n");
    let rows = input::read_rows(&input_path).unwrap();

    let pipeline = pipeline_in(&temp_dir);

    for &target in &[32630u32, 2136] {
        let outcome = pipeline.run(&rows, CrsId(4326), CrsId(target)).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        let point = outcome.collection.points[0];
        assert!(point.x.is_finite() && point.y.is_finite());
    }
}

/// Purpose: validate that unknown EPSG codes surface as one aggregate failure
/// Benefit: legality of a code is the authority's decision, reported once
#[test]
fn test_unknown_epsg_code_is_aggregate_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "1.0,2.0\n");
    let rows = input::read_rows(&input_path).unwrap();

    let pipeline = pipeline_in(&temp_dir);
    let result = pipeline.run(&rows, CrsId(4326), CrsId(99999));

    assert!(matches!(result, Err(Error::Reprojection { .. })));
    assert!(!pipeline.config().transformed_path().exists());
}
