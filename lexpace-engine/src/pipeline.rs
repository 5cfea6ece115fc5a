//! Annotate-then-merge pipeline and its builder

use crate::annotator::{create_annotator, AnnotatorKind, AnnotatorOptions, TagColumn};
use crate::error::{EngineError, Result};
use crate::input::Input;
use lexpace_core::{get_rule_table, merge, AnnotationProvider, MergedToken, RuleTable};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Runs one annotation provider and merges its tokens with one rule table
///
/// A tagger is immutable after construction and can be shared across threads.
#[derive(Clone)]
pub struct Tagger {
    annotator: Arc<dyn AnnotationProvider>,
    rules: Arc<RuleTable>,
}

/// Merged tokens plus processing metadata
#[derive(Debug, Clone)]
pub struct TagOutput {
    /// Display units in document order
    pub tokens: Vec<MergedToken>,
    /// Counts and timing for this document
    pub metadata: TagMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TagMetadata {
    /// Tokens returned by the annotation provider
    pub annotated_tokens: usize,
    /// Display units after merging
    pub merged_tokens: usize,
    /// Wall time spent annotating and merging
    pub processing_time_ms: f64,
    /// Provider name
    pub annotator: String,
    /// Rule table name
    pub rule_set: String,
}

impl std::fmt::Debug for Tagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagger")
            .field("annotator", &self.annotator.name())
            .field("rules", &self.rules.name())
            .finish()
    }
}

impl Tagger {
    /// Combine a provider and a rule table
    pub fn new(annotator: Arc<dyn AnnotationProvider>, rules: Arc<RuleTable>) -> Self {
        Self { annotator, rules }
    }

    /// Start configuring a tagger
    pub fn builder() -> TaggerBuilder {
        TaggerBuilder::new()
    }

    /// Provider in use
    pub fn annotator(&self) -> &dyn AnnotationProvider {
        self.annotator.as_ref()
    }

    /// Rule table in use
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Annotate `text` and merge the result into display units
    pub fn tag(&self, text: &str) -> Result<TagOutput> {
        let start = Instant::now();
        log::info!("Processing text of length {}", text.len());

        let annotated = self.annotator.annotate(text)?;
        let tokens = merge(&annotated, self.rules.as_ref());

        let metadata = TagMetadata {
            annotated_tokens: annotated.len(),
            merged_tokens: tokens.len(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            annotator: self.annotator.name().to_string(),
            rule_set: self.rules.name().to_string(),
        };
        log::info!(
            "Processed {} tokens into {} display units",
            metadata.annotated_tokens,
            metadata.merged_tokens
        );

        Ok(TagOutput { tokens, metadata })
    }

    /// Read an input source and tag it
    pub fn tag_input(&self, input: Input) -> Result<TagOutput> {
        log::debug!("Reading input from {}", input.label());
        let text = input.into_text()?;
        self.tag(&text)
    }
}

/// Builder for [`Tagger`]
///
/// Defaults to the lexicon annotator and the `universal` rule table.
#[derive(Default)]
pub struct TaggerBuilder {
    options: AnnotatorOptions,
    annotator: Option<Arc<dyn AnnotationProvider>>,
    rule_set: Option<String>,
    rules: Option<RuleTable>,
}

impl TaggerBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a built-in provider
    pub fn annotator_kind(mut self, kind: AnnotatorKind) -> Self {
        self.options.kind = kind;
        self
    }

    /// Use a custom provider; overrides [`annotator_kind`](Self::annotator_kind)
    pub fn annotator(mut self, annotator: Arc<dyn AnnotationProvider>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Lexicon file for the lexicon annotator
    pub fn lexicon_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.lexicon_path = Some(path.into());
        self
    }

    /// Tag column for the CoNLL-U reader
    pub fn conllu_column(mut self, column: TagColumn) -> Self {
        self.options.conllu_column = column;
        self
    }

    /// Use a built-in rule table by name
    pub fn rule_set<S: Into<String>>(mut self, name: S) -> Self {
        self.rule_set = Some(name.into());
        self
    }

    /// Use a custom rule table; overrides [`rule_set`](Self::rule_set)
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build the tagger
    pub fn build(self) -> Result<Tagger> {
        let annotator = match self.annotator {
            Some(annotator) => annotator,
            None => create_annotator(&self.options)?,
        };

        let rules = match (self.rules, self.rule_set) {
            (Some(rules), _) => rules,
            (None, Some(name)) => get_rule_table(&name)
                .map_err(EngineError::from)?
                .clone(),
            (None, None) => RuleTable::reference().clone(),
        };

        log::debug!(
            "Tagger uses annotator {} with rule set {}",
            annotator.name(),
            rules.name()
        );

        Ok(Tagger::new(annotator, Arc::new(rules)))
    }
}
