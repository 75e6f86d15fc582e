//! Error types for the estimator

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// An input value fell outside its allowed range. The rejected input is
    /// never applied, so any state the caller holds stays as it was.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this error came from rejected user input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
