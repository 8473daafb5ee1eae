//! Transform pipeline orchestration
//!
//! Wires the five stages together and drives the per-invocation state
//! machine: Idle -> Parsing -> Validating -> Building -> Reprojecting ->
//! Serializing -> Idle, with Failed reachable from Validating and
//! Reprojecting. A failed invocation publishes nothing: the transformed
//! output file is only written after the whole collection transformed.
//!
//! One invocation runs to completion before another may start. The
//! intermediate file paths are shared state, so callers must not overlap
//! invocations against one configuration; the CLI process is that
//! serialization boundary.

use tracing::{debug, info};

use crate::app::models::{CrsId, TransformedCollection};
use crate::app::services::{geometry, record_parser, reprojection::ReprojectionEngine, serializer, validator};
use crate::config::Config;
use crate::constants::COORDINATE_COLUMNS;
use crate::{Error, Result};

/// Pipeline states for one transform invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Parsing,
    Validating,
    Building,
    Reprojecting,
    Serializing,
    Failed,
}

/// Statistics for one transform invocation
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStats {
    /// Raw rows handed to the pipeline (blank rows included)
    pub rows_in: usize,
    /// Rows silently dropped by the validator
    pub rows_dropped: usize,
    /// Transformed rows published
    pub rows_out: usize,
    pub source_crs: CrsId,
    pub target_crs: CrsId,
}

/// The published result of a successful transform invocation
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    /// Transformed geometries in the target system
    pub collection: TransformedCollection,
    /// Serialized (x, y) rows, ready for display or export
    pub rows: Vec<Vec<String>>,
    pub stats: TransformStats,
}

/// Synchronous coordinate transform pipeline.
///
/// Owns all intermediate collections for the duration of one `run` call;
/// nothing is shared across invocations except the configured paths.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one transform invocation over fully materialized raw rows.
    ///
    /// Rows must not be mutated by the caller while the call is in
    /// flight. On failure the previous transformed output, if any, is
    /// left untouched.
    pub fn run(
        &self,
        rows: &[Vec<String>],
        source_crs: CrsId,
        target_crs: CrsId,
    ) -> Result<TransformOutcome> {
        let mut state = PipelineState::Idle;

        match self.run_stages(&mut state, rows, source_crs, target_crs) {
            Ok(outcome) => {
                advance(&mut state, PipelineState::Idle);
                Ok(outcome)
            }
            Err(error) => {
                advance(&mut state, PipelineState::Failed);
                advance(&mut state, PipelineState::Idle);
                Err(error)
            }
        }
    }

    fn run_stages(
        &self,
        state: &mut PipelineState,
        rows: &[Vec<String>],
        source_crs: CrsId,
        target_crs: CrsId,
    ) -> Result<TransformOutcome> {
        advance(state, PipelineState::Parsing);
        let raw_rows = record_parser::parse_cells(rows);

        // Empty-table guard before any file is touched
        if raw_rows.iter().all(|row| row.is_blank()) {
            return Err(Error::empty_input("input table is empty"));
        }

        // Mirror the raw coordinate columns to the staging path before
        // validating, matching the original pre-transform export.
        self.config.validate()?;
        self.config.ensure_data_dir()?;
        let staging_rows = raw_rows
            .iter()
            .map(|row| {
                (0..COORDINATE_COLUMNS)
                    .map(|i| row.cells.get(i).cloned().unwrap_or_default())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        serializer::write_rows(&self.config.staging_path(), &staging_rows)?;

        advance(state, PipelineState::Validating);
        let records = validator::validate_rows(&raw_rows)?;
        let rows_dropped = raw_rows.len() - records.len();

        advance(state, PipelineState::Building);
        let geometries = geometry::build_geometries(&records, source_crs);

        advance(state, PipelineState::Reprojecting);
        let engine = ReprojectionEngine::new(source_crs, target_crs)?;
        let collection = engine.transform_collection(&geometries)?;

        advance(state, PipelineState::Serializing);
        let serialized = serializer::to_rows(&collection);
        serializer::write_rows(&self.config.transformed_path(), &serialized)?;

        let stats = TransformStats {
            rows_in: raw_rows.len(),
            rows_dropped,
            rows_out: serialized.len(),
            source_crs,
            target_crs,
        };

        info!(
            "Transform complete: {} -> {}, {} rows in, {} rows out",
            source_crs, target_crs, stats.rows_in, stats.rows_out
        );

        Ok(TransformOutcome {
            collection,
            rows: serialized,
            stats,
        })
    }
}

fn advance(state: &mut PipelineState, next: PipelineState) {
    debug!("Pipeline state: {:?} -> {:?}", state, next);
    *state = next;
}
