use thiserror::Error;

use crate::domain::ListKind;

/// Error type that captures common questionnaire failures.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{list} index {index} is out of bounds (length {len})")]
    IndexOutOfBounds {
        list: ListKind,
        index: usize,
        len: usize,
    },
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
