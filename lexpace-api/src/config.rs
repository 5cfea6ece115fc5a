//! High-level configuration API

use crate::error::{ApiError, Result};
use lexpace_core::{RuleTable, DEFAULT_RULE_SET};
use lexpace_engine::{AnnotatorKind, TagColumn, Tagger, TaggerBuilder};
use std::path::PathBuf;

/// High-level configuration for tagging
#[derive(Debug, Clone)]
pub struct Config {
    /// Annotation provider
    pub annotator: AnnotatorKind,
    /// Built-in rule table name
    pub rule_set: String,
    /// Rule table file, used instead of `rule_set` when set
    pub rules_path: Option<PathBuf>,
    /// Lexicon file for the lexicon annotator
    pub lexicon_path: Option<PathBuf>,
    /// Read XPOS instead of UPOS from CoNLL-U input
    pub use_xpos: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            annotator: AnnotatorKind::default(),
            rule_set: DEFAULT_RULE_SET.to_string(),
            rules_path: None,
            lexicon_path: None,
            use_xpos: false,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub(crate) fn to_tagger(&self) -> Result<Tagger> {
        Ok(self.tagger_builder()?.build()?)
    }

    pub(crate) fn tagger_builder(&self) -> Result<TaggerBuilder> {
        let mut builder = TaggerBuilder::new().annotator_kind(self.annotator);

        builder = match &self.rules_path {
            Some(path) => {
                let rules = RuleTable::from_file(path).map_err(|e| {
                    ApiError::Config(format!("failed to load {}: {e}", path.display()))
                })?;
                builder.rules(rules)
            }
            None => builder.rule_set(self.rule_set.clone()),
        };

        if let Some(path) = &self.lexicon_path {
            builder = builder.lexicon_path(path.clone());
        }
        if self.use_xpos {
            builder = builder.conllu_column(TagColumn::Xpos);
        }

        Ok(builder)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the annotator by name (`lexicon`, `conllu`, `json`)
    pub fn annotator(mut self, name: &str) -> Result<Self> {
        self.config.annotator = name.parse().map_err(ApiError::from)?;
        Ok(self)
    }

    /// Set the annotator kind directly
    pub fn annotator_kind(mut self, kind: AnnotatorKind) -> Self {
        self.config.annotator = kind;
        self
    }

    /// Use a built-in rule table
    pub fn rule_set(mut self, name: impl Into<String>) -> Self {
        self.config.rule_set = name.into();
        self
    }

    /// Load the rule table from a TOML file
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rules_path = Some(path.into());
        self
    }

    /// Load the lexicon from a TOML file
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon_path = Some(path.into());
        self
    }

    /// Read XPOS tags from CoNLL-U input
    pub fn xpos(mut self, enabled: bool) -> Self {
        self.config.use_xpos = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.rule_set.trim().is_empty() && self.config.rules_path.is_none() {
            return Err(ApiError::Config(
                "rule set name or rules file required".to_string(),
            ));
        }

        Ok(self.config)
    }
}
