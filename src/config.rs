//! Configuration management for the transform pipeline.
//!
//! The original tool kept its two intermediate file paths as process-wide
//! state. Here they live in an explicit configuration value passed into
//! the pipeline, so tests can redirect them to temporary locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_DATA_DIR, STAGING_FILENAME, TRANSFORMED_FILENAME};
use crate::{Error, Result};

/// Configuration for a transform invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the intermediate files
    pub data_dir: PathBuf,

    /// File name for the pre-transform export of raw rows
    pub staging_filename: String,

    /// File name for the post-transform export
    pub transformed_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            staging_filename: STAGING_FILENAME.to_string(),
            transformed_filename: TRANSFORMED_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Create configuration with a custom staging file name
    pub fn with_staging_filename(mut self, name: impl Into<String>) -> Self {
        self.staging_filename = name.into();
        self
    }

    /// Create configuration with a custom transformed file name
    pub fn with_transformed_filename(mut self, name: impl Into<String>) -> Self {
        self.transformed_filename = name.into();
        self
    }

    /// Full path of the pre-transform staging export
    pub fn staging_path(&self) -> PathBuf {
        self.data_dir.join(&self.staging_filename)
    }

    /// Full path of the post-transform export
    pub fn transformed_path(&self) -> PathBuf {
        self.data_dir.join(&self.transformed_filename)
    }

    /// Create the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir).map_err(|e| {
                Error::io(
                    format!(
                        "Failed to create data directory: {}",
                        self.data_dir.display()
                    ),
                    e,
                )
            })?;
        }

        if !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data path is not a directory: {}",
                self.data_dir.display()
            )));
        }

        Ok(())
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.staging_filename.is_empty() || self.transformed_filename.is_empty() {
            return Err(Error::configuration(
                "Intermediate file names cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
