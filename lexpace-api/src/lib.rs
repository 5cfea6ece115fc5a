//! Public API for lexpace
//!
//! This crate provides a small, stable interface over the tagging pipeline:
//! submit text, get back the merged display units and their categories as
//! two parallel sequences.
//!
//! ```rust
//! use lexpace_api::{tag_text, Category};
//!
//! let output = tag_text("Hello, world!").unwrap();
//! assert_eq!(output.tokens, vec!["Hello,", "world!"]);
//! assert_eq!(output.groups, vec![Category::Content, Category::Content]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, TagResponse};
pub use error::ApiError;
pub use lexpace_core::Category;
pub use lexpace_engine::{AnnotationProvider, AnnotatorKind};

/// Main entry point for tagging text
///
/// Owns a configured tagger and validates submitted text before handing it
/// to the annotation provider.
pub struct TokenTagger {
    inner: Arc<lexpace_engine::Tagger>,
    config: Config,
}

impl TokenTagger {
    /// Create a tagger with default configuration (lexicon annotator, universal rules)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a tagger with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = config.to_tagger()?;
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Create a tagger around a custom annotation provider
    pub fn with_provider(config: Config, provider: Arc<dyn AnnotationProvider>) -> Result<Self> {
        let inner = config.tagger_builder()?.annotator(provider).build()?;
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Process input and return the merged tokens
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.read_text()?;
        if text.trim().is_empty() {
            log::warn!("Rejected blank input");
            return Err(ApiError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }

        let total_bytes = text.len();

        // Convert to engine input
        let engine_input = lexpace_engine::Input::from_text(text);
        let tagged = self.inner.tag_input(engine_input)?;

        let metadata = Metadata {
            total_bytes,
            annotated_tokens: tagged.metadata.annotated_tokens,
            merged_tokens: tagged.metadata.merged_tokens,
            processing_time_ms: tagged.metadata.processing_time_ms,
            annotator: tagged.metadata.annotator,
            rule_set: tagged.metadata.rule_set,
        };

        Ok(Output::from_merged(tagged.tokens, metadata))
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Tag text with default configuration
pub fn tag_text(text: &str) -> Result<TagResponse> {
    let tagger = TokenTagger::new()?;
    Ok(tagger.process(Input::from_text(text))?.into_response())
}

/// Tag a file with default configuration
pub fn tag_file<P: AsRef<std::path::Path>>(path: P) -> Result<TagResponse> {
    let tagger = TokenTagger::new()?;
    Ok(tagger
        .process(Input::from_file(path.as_ref().to_path_buf()))?
        .into_response())
}
