// File: src/error.rs
use thiserror::Error;

pub type Result<T, E = ConverseError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConverseError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("data format: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid direction '{0}' (expected 'ab' or 'ba')")]
    InvalidDirection(String),
    #[error("only one input method may be used: inline text or an input file")]
    InputConflict,
    #[error("no input method provided")]
    MissingInput,
}

impl ConverseError {
    pub fn invalid_direction(token: impl Into<String>) -> Self {
        Self::InvalidDirection(token.into())
    }
}
