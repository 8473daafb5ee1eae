//! Coordinate Converter Library
//!
//! A Rust library for reprojecting tabular coordinate pairs between
//! coordinate reference systems identified by EPSG codes.
//!
//! This library provides tools for:
//! - Parsing delimited text rows into typed coordinate records
//! - Validating and filtering incomplete or malformed records
//! - Building point geometries tagged with a source reference system
//! - Reprojecting geometry collections between two EPSG systems
//! - Serializing transformed geometries back to tabular form

pub mod config;
pub mod constants;
pub mod pipeline;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod geometry;
        pub mod record_parser;
        pub mod reprojection;
        pub mod serializer;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{CoordinateRecord, CrsId, PointGeometry, TransformedCollection};
pub use config::Config;
pub use pipeline::Pipeline;

/// Result type alias for the coordinate converter
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for coordinate conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// No rows supplied, or no rows survived validation
    #[error("No coordinates to transform: {message}")]
    EmptyInput { message: String },

    /// A cell expected to be numeric failed to parse
    #[error("Invalid coordinates entered: {message}")]
    InvalidCoordinate { message: String },

    /// Source and target reference systems are the same
    #[error("Cannot convert {source_crs} to {target_crs}: systems are identical")]
    IdenticalSystems {
        source_crs: crate::app::models::CrsId,
        target_crs: crate::app::models::CrsId,
    },

    /// The reference-system transform authority rejected the request
    #[error("Reprojection failed: {message}")]
    Reprojection { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an invalid coordinate error
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Create an identical systems error naming both identifiers
    pub fn identical_systems(
        source_crs: crate::app::models::CrsId,
        target_crs: crate::app::models::CrsId,
    ) -> Self {
        Self::IdenticalSystems {
            source_crs,
            target_crs,
        }
    }

    /// Create a reprojection failure
    pub fn reprojection(message: impl Into<String>) -> Self {
        Self::Reprojection {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
