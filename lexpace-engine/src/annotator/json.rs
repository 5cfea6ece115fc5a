//! JSON token list reader
//!
//! Accepts the output of an external tagger serialized as
//! `[{"text": "Paris", "pos": "PROPN", "entity": "GPE"}, ...]`.
//! `entity` may be a boolean, a label string, or absent; an empty label or
//! `"O"` counts as no entity.

use lexpace_core::{AnnotatedToken, AnnotationError, AnnotationProvider};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntityField {
    Flag(bool),
    Label(String),
}

impl EntityField {
    fn is_entity(&self) -> bool {
        match self {
            EntityField::Flag(flag) => *flag,
            EntityField::Label(label) => !label.is_empty() && label != "O",
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonToken {
    text: String,
    #[serde(alias = "pos_tag", alias = "upos", alias = "tag")]
    pos: String,
    #[serde(default, alias = "ent_type", alias = "is_named_entity")]
    entity: Option<EntityField>,
}

/// Annotation provider over a JSON array of tagged tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAnnotator;

impl JsonAnnotator {
    /// Create a JSON annotator
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationProvider for JsonAnnotator {
    fn name(&self) -> &str {
        "json"
    }

    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        let parsed: Vec<JsonToken> =
            serde_json::from_str(text).map_err(|e| AnnotationError::Malformed {
                line: e.line(),
                reason: e.to_string(),
            })?;

        parsed
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                if token.text.is_empty() {
                    return Err(AnnotationError::Malformed {
                        line: index + 1,
                        reason: format!("token {} has empty text", index + 1),
                    });
                }
                Ok(AnnotatedToken {
                    is_named_entity: token.entity.as_ref().is_some_and(EntityField::is_entity),
                    text: token.text,
                    pos_tag: token.pos,
                })
            })
            .collect()
    }
}
