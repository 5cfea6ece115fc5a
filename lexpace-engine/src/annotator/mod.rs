//! Annotation providers
//!
//! Each provider turns one document into annotated base tokens. The lexicon
//! annotator works on raw text; the CoNLL-U and JSON readers accept output
//! that an external tagger has already produced.

pub mod conllu;
pub mod json;
pub mod lexicon;

pub use conllu::{ConlluAnnotator, TagColumn};
pub use json::JsonAnnotator;
pub use lexicon::{LexiconAnnotator, LexiconConfig};

use crate::error::{EngineError, Result};
use lexpace_core::AnnotationProvider;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Available annotation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotatorKind {
    /// Built-in rule-based tagger over raw text
    #[default]
    Lexicon,
    /// Pre-annotated CoNLL-U documents
    Conllu,
    /// Pre-annotated JSON token arrays
    Json,
}

impl AnnotatorKind {
    /// Every provider, in display order
    pub const ALL: [AnnotatorKind; 3] = [
        AnnotatorKind::Lexicon,
        AnnotatorKind::Conllu,
        AnnotatorKind::Json,
    ];

    /// Identifier used on the command line and in configs
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotatorKind::Lexicon => "lexicon",
            AnnotatorKind::Conllu => "conllu",
            AnnotatorKind::Json => "json",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            AnnotatorKind::Lexicon => "built-in English tagger for raw text",
            AnnotatorKind::Conllu => "reads tokens and UPOS/XPOS tags from CoNLL-U",
            AnnotatorKind::Json => "reads a JSON array of {text, pos, entity} objects",
        }
    }
}

impl fmt::Display for AnnotatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotatorKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lexicon" => Ok(AnnotatorKind::Lexicon),
            "conllu" | "conll-u" => Ok(AnnotatorKind::Conllu),
            "json" => Ok(AnnotatorKind::Json),
            other => Err(EngineError::ConfigError(format!(
                "Unknown annotator '{other}' (expected one of: lexicon, conllu, json)"
            ))),
        }
    }
}

/// Everything needed to construct a provider
#[derive(Debug, Clone, Default)]
pub struct AnnotatorOptions {
    /// Which provider to build
    pub kind: AnnotatorKind,
    /// Lexicon file overriding the embedded English lexicon
    pub lexicon_path: Option<PathBuf>,
    /// Tag column for the CoNLL-U reader
    pub conllu_column: TagColumn,
}

impl AnnotatorOptions {
    /// Options for a provider kind, all other settings default
    pub fn new(kind: AnnotatorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// Build a shared provider
pub fn create_annotator(options: &AnnotatorOptions) -> Result<Arc<dyn AnnotationProvider>> {
    let provider: Arc<dyn AnnotationProvider> = match options.kind {
        AnnotatorKind::Lexicon => match &options.lexicon_path {
            Some(path) => Arc::new(LexiconAnnotator::from_file(path)?),
            None => LexiconAnnotator::shared_english(),
        },
        AnnotatorKind::Conllu => Arc::new(ConlluAnnotator::with_column(options.conllu_column)),
        AnnotatorKind::Json => Arc::new(JsonAnnotator::new()),
    };

    log::debug!("Created {} annotator", provider.name());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("lexicon".parse::<AnnotatorKind>().unwrap(), AnnotatorKind::Lexicon);
        assert_eq!("CoNLL-U".parse::<AnnotatorKind>().unwrap(), AnnotatorKind::Conllu);
        assert_eq!("JSON".parse::<AnnotatorKind>().unwrap(), AnnotatorKind::Json);
        assert!("spacy".parse::<AnnotatorKind>().is_err());
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in AnnotatorKind::ALL {
            assert_eq!(kind.to_string().parse::<AnnotatorKind>().unwrap(), kind);
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn test_create_each_annotator() {
        for kind in AnnotatorKind::ALL {
            let provider = create_annotator(&AnnotatorOptions::new(kind)).unwrap();
            assert_eq!(provider.name(), kind.as_str());
        }
    }

    #[test]
    fn test_default_lexicon_shared_between_annotators() {
        let first = create_annotator(&AnnotatorOptions::default()).unwrap();
        let second = create_annotator(&AnnotatorOptions::default()).unwrap();
        assert!(std::ptr::addr_eq(Arc::as_ptr(&first), Arc::as_ptr(&second)));
    }

    #[test]
    fn test_missing_lexicon_file() {
        let options = AnnotatorOptions {
            kind: AnnotatorKind::Lexicon,
            lexicon_path: Some(PathBuf::from("/nonexistent/lexicon.toml")),
            ..AnnotatorOptions::default()
        };
        assert!(matches!(
            create_annotator(&options),
            Err(EngineError::IoError(_))
        ));
    }
}
