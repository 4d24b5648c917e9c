#![deny(unsafe_code)]

use std::path::PathBuf;

use dx_model::Axis;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid indicator set for {axis}: {message}")]
    InvalidSet { axis: Axis, message: String },

    #[error("duplicate indicator set in catalog: {axis}")]
    DuplicateSet { axis: Axis },

    #[error("invalid dataset section in {path}: {message}")]
    InvalidDataset { path: PathBuf, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_set(axis: Axis, message: impl Into<String>) -> Self {
        Self::InvalidSet {
            axis,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
