//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Annotation provider (`lexicon`, `conllu`, `json`)
    pub annotator: String,

    /// Built-in rule table
    pub rule_set: String,

    /// Rule table file, overriding `rule_set`
    pub rules_config: Option<PathBuf>,

    /// Lexicon file for the lexicon annotator
    pub lexicon: Option<PathBuf>,

    /// Read XPOS instead of UPOS from CoNLL-U input
    pub xpos: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            annotator: "lexicon".to_string(),
            rule_set: lexpace_core::DEFAULT_RULE_SET.to_string(),
            rules_config: None,
            lexicon: None,
            xpos: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
