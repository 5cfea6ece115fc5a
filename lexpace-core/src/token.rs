//! Token types flowing into and out of the merger

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Base token as produced by an annotation provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text, without trailing whitespace
    pub text: String,
    /// Part-of-speech tag from the provider's tag vocabulary
    pub pos_tag: String,
    /// Whether the provider marked this token as part of a named entity
    ///
    /// Only the flag is carried. Entity labels and span boundaries would need
    /// a separate output alongside the merged tokens.
    pub is_named_entity: bool,
}

impl AnnotatedToken {
    /// Create a token that is not part of a named entity
    pub fn new(text: impl Into<String>, pos_tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos_tag: pos_tag.into(),
            is_named_entity: false,
        }
    }

    /// Create a token flagged as part of a named entity
    pub fn entity(text: impl Into<String>, pos_tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos_tag: pos_tag.into(),
            is_named_entity: true,
        }
    }
}

/// Output unit: a token with any trailing punctuation folded in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedToken {
    /// Concatenated surface text of the group
    pub text: String,
    /// Category of the token that opened the group
    pub category: Category,
}

impl MergedToken {
    /// Create a merged token
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Split merged tokens into the two parallel sequences callers receive
pub fn into_columns(tokens: Vec<MergedToken>) -> (Vec<String>, Vec<Category>) {
    tokens
        .into_iter()
        .map(|token| (token.text, token.category))
        .unzip()
}
