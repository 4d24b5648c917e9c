//! Error types for survey data ingestion.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort loading a dataset.
///
/// Any of these is terminal for a session: no summary is built from a
/// partial load.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === GeoJSON Errors ===
    /// Boundary file is not valid JSON.
    #[error("failed to parse GeoJSON {path}: {source}")]
    GeoJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Boundary file is JSON but not a FeatureCollection.
    #[error("{path} is not a GeoJSON FeatureCollection")]
    NotFeatureCollection { path: PathBuf },

    /// A feature lacks the region name property.
    #[error("feature {index} in {path} has no string property '{property}'")]
    MissingRegionName {
        path: PathBuf,
        index: usize,
        property: String,
    },
}

impl IngestError {
    /// Maps an I/O error, distinguishing a missing file.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
