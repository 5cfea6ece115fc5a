//! Core error types
//!
//! Classification and merging are total over well-formed tokens, so the only
//! failures here come from loading rule tables and from annotation providers.

use thiserror::Error;

/// Errors raised while building or loading a rule table
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Requested built-in rule set does not exist
    #[error("Unknown rule set: {0}")]
    UnknownRuleSet(String),

    /// Rule table violates one of its invariants
    #[error("Invalid rule table: {0}")]
    InvalidRuleTable(String),

    /// I/O error while reading a rule table from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by an annotation provider
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// Input document could not be parsed by the provider
    #[error("malformed input at line {line}: {reason}")]
    Malformed {
        /// 1-based line of the offending input, or token position for token lists
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Provider-specific failure
    #[error("{provider} failed: {message}")]
    Provider {
        /// Name of the failing provider
        provider: String,
        /// Description of the failure
        message: String,
    },
}

impl AnnotationError {
    /// Shorthand for a provider failure
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        AnnotationError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = AnnotationError::Malformed {
            line: 3,
            reason: "expected 10 columns, found 4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed input at line 3: expected 10 columns, found 4"
        );
    }

    #[test]
    fn test_provider_display() {
        let err = AnnotationError::provider("conllu", "empty document");
        assert_eq!(err.to_string(), "conllu failed: empty document");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
