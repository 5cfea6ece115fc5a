//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use lexpace_core::{Category, MergedToken};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(ApiError::Io)?;
                String::from_utf8(buffer).map_err(ApiError::Utf8)
            }
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Bytes of submitted text
    pub total_bytes: usize,
    /// Tokens produced by the annotation provider
    pub annotated_tokens: usize,
    /// Display units after merging
    pub merged_tokens: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Annotation provider used
    pub annotator: String,
    /// Rule table used
    pub rule_set: String,
}

/// Merged display units as two parallel sequences plus metadata
///
/// `tokens[i]` is shown with the category `groups[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Display texts in document order
    pub tokens: Vec<String>,
    /// Category of each display text
    pub groups: Vec<Category>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    pub(crate) fn from_merged(merged: Vec<MergedToken>, metadata: Metadata) -> Self {
        let (tokens, groups) = lexpace_core::into_columns(merged);
        Self {
            tokens,
            groups,
            metadata,
        }
    }

    /// Number of display units
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the document produced no display units
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(text, category)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.groups.iter().copied())
    }

    /// Drop metadata, keeping the wire shape
    pub fn into_response(self) -> TagResponse {
        TagResponse {
            tokens: self.tokens,
            groups: self.groups,
        }
    }
}

/// Wire shape returned to callers: `{"tokens": [...], "groups": [...]}`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagResponse {
    /// Display texts in document order
    pub tokens: Vec<String>,
    /// Category of each display text
    pub groups: Vec<Category>,
}

impl From<Output> for TagResponse {
    fn from(output: Output) -> Self {
        output.into_response()
    }
}

#[cfg(feature = "serde")]
impl TagResponse {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
