//! API error types

use lexpace_core::CoreError;
use lexpace_engine::EngineError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Submitted text is empty or whitespace only
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The annotation provider failed on the submitted text
    #[error("annotation failure: {0}")]
    AnnotationFailure(String),

    /// Engine error
    #[error("engine error: {0}")]
    Engine(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Annotation(inner) => ApiError::AnnotationFailure(inner.to_string()),
            EngineError::Core(CoreError::Io(inner)) => ApiError::Io(inner),
            EngineError::Core(inner) => ApiError::Config(inner.to_string()),
            EngineError::ConfigError(msg) => ApiError::Config(msg),
            other => ApiError::Engine(other.to_string()),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
