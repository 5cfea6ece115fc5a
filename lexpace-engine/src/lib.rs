//! Annotation providers and the tagging pipeline
//!
//! This crate connects a text source, an [`AnnotationProvider`] and a
//! [`RuleTable`] into a [`Tagger`] that produces merged display units.

#![warn(missing_docs)]

pub mod annotator;
pub mod error;
pub mod input;
pub mod pipeline;

pub use annotator::{
    create_annotator, AnnotatorKind, AnnotatorOptions, ConlluAnnotator, JsonAnnotator,
    LexiconAnnotator, TagColumn,
};
pub use error::{EngineError, Result};
pub use input::Input;
pub use pipeline::{TagMetadata, TagOutput, Tagger, TaggerBuilder};

// Re-export from core for convenience
pub use lexpace_core::{
    AnnotatedToken, AnnotationError, AnnotationProvider, Category, MergedToken, RuleTable,
};
