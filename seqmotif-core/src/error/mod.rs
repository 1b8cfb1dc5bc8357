//! Core error types for seqmotif

use thiserror::Error;

/// Main error type for alignment and motif operations
#[derive(Error, Debug)]
pub enum SeqmotifError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A profile lookup hit a symbol the profile was never trained on
    #[error("Unknown symbol '{symbol}' at position {position}: not present in profile")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for seqmotif operations
pub type SeqmotifResult<T> = Result<T, SeqmotifError>;

impl SeqmotifError {
    /// Shorthand for the input-shape failures raised throughout the engines
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        SeqmotifError::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for SeqmotifError {
    fn from(err: serde_json::Error) -> Self {
        SeqmotifError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SeqmotifError {
    fn from(err: anyhow::Error) -> Self {
        SeqmotifError::Other(err.to_string())
    }
}
