//! Annotation provider seam

use crate::error::AnnotationError;
use crate::token::AnnotatedToken;

/// Source of part-of-speech annotated tokens
///
/// Implementations must be safe to share between threads; a provider is
/// queried once per document and keeps no per-document state.
pub trait AnnotationProvider: Send + Sync {
    /// Short identifier used in logs and metadata
    fn name(&self) -> &str;

    /// Split `text` into ordered, annotated base tokens
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError>;
}

impl<P: AnnotationProvider + ?Sized> AnnotationProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        (**self).annotate(text)
    }
}
