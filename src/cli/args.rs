//! Command-line argument definitions for the coordinate converter
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::models::CrsId;
use crate::config::Config;
use crate::{Error, Result};

/// CLI arguments for the coordinate converter
///
/// Reprojects tabular coordinate pairs between coordinate reference
/// systems identified by EPSG codes.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coord-converter",
    version,
    about = "Convert tabular coordinates between EPSG reference systems",
    long_about = "Reads coordinate pairs from a CSV file (x, y, optional label; no header \
                  required), reprojects them from a source to a target EPSG reference \
                  system, and writes the transformed pairs back as CSV rows. X is \
                  longitude or easting and Y is latitude or northing; the columns are \
                  taken in that literal order."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the coordinate converter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Transform coordinates from one reference system to another (main command)
    Transform(TransformArgs),
    /// List the well-known selectable reference systems
    Systems(SystemsArgs),
}

/// Arguments for the transform command
#[derive(Debug, Clone, Parser)]
pub struct TransformArgs {
    /// Input CSV file with coordinate rows
    ///
    /// Each row holds X in the first column and Y in the second; a third
    /// column is carried through as an opaque label. No header row is
    /// expected.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input CSV file with x,y coordinate rows"
    )]
    pub input_path: PathBuf,

    /// EPSG code of the reference system the input coordinates are in
    #[arg(
        short = 'f',
        long = "from",
        value_name = "EPSG",
        help = "Source EPSG code (e.g. 4326)"
    )]
    pub source_crs: CrsId,

    /// EPSG code of the reference system to transform into
    #[arg(
        short = 't',
        long = "to",
        value_name = "EPSG",
        help = "Target EPSG code (e.g. 32630)"
    )]
    pub target_crs: CrsId,

    /// Export file for the transformed coordinates
    ///
    /// If not specified, transformed rows are printed to stdout. The
    /// fixed intermediate copy under the data directory is written either
    /// way.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Export file for transformed coordinates (default: stdout)"
    )]
    pub output_path: Option<PathBuf>,

    /// Directory for the fixed intermediate files
    ///
    /// Holds the pre-transform staging copy and the post-transform
    /// export. Created if it does not exist. Defaults to ./data
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory for intermediate files (default: ./data)"
    )]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the transformed rows themselves.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the systems command
#[derive(Debug, Clone, Parser)]
pub struct SystemsArgs {
    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl TransformArgs {
    /// Validate the transform command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if let Some(output_path) = &self.output_path {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the pipeline configuration from the arguments
    pub fn config(&self) -> Config {
        match &self.data_dir {
            Some(data_dir) => Config::default().with_data_dir(data_dir.clone()),
            None => Config::default(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl SystemsArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
