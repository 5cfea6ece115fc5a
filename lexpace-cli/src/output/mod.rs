//! Output formatting module

use anyhow::Result;
use lexpace_core::Category;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One tagged document: parallel token and category sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedDocument {
    /// File path or `<stdin>`
    pub source: String,
    /// Display units in document order
    pub tokens: Vec<String>,
    /// Category of each display unit
    pub groups: Vec<Category>,
}

impl TaggedDocument {
    /// Iterate over `(token, category)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.groups.iter().copied())
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, document: &TaggedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Make control characters inside a token visible on one line
pub(crate) fn escape_whitespace(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Boxed writer shared by all formatters
pub type BoxedWriter = Box<dyn Write + Send + Sync>;
