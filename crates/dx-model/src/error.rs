use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown axis: {0}")]
    UnknownAxis(String),
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
