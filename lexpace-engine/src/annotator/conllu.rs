//! CoNLL-U reader
//!
//! Treats an already annotated CoNLL-U document as the annotation result.
//! Each syntactic word becomes one token; multiword ranges (`3-4`) and empty
//! nodes (`5.1`) are skipped. Named entities are read from the MISC column
//! (`NER=B-PER`, `Entity=...`), where the value `O` means "no entity".

use lexpace_core::{AnnotatedToken, AnnotationError, AnnotationProvider};

const COLUMN_COUNT: usize = 10;
const FORM: usize = 1;
const UPOS: usize = 3;
const XPOS: usize = 4;
const MISC: usize = 9;

const ENTITY_KEYS: &[&str] = &["NER", "Entity", "NE"];

/// Which column supplies the part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagColumn {
    /// Universal POS tags (column 4)
    #[default]
    Upos,
    /// Language-specific tags (column 5), e.g. Penn Treebank
    Xpos,
}

impl TagColumn {
    fn index(self) -> usize {
        match self {
            TagColumn::Upos => UPOS,
            TagColumn::Xpos => XPOS,
        }
    }
}

/// Annotation provider over CoNLL-U text
#[derive(Debug, Clone, Default)]
pub struct ConlluAnnotator {
    column: TagColumn,
}

impl ConlluAnnotator {
    /// Read tags from the UPOS column
    pub fn new() -> Self {
        Self::default()
    }

    /// Read tags from the given column
    pub fn with_column(column: TagColumn) -> Self {
        Self { column }
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Result<Option<AnnotatedToken>, AnnotationError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMN_COUNT {
            return Err(AnnotationError::Malformed {
                line: line_no,
                reason: format!(
                    "expected {COLUMN_COUNT} tab-separated columns, found {}",
                    fields.len()
                ),
            });
        }

        let id = fields[0];
        if id.contains('-') || id.contains('.') {
            return Ok(None);
        }
        if id.parse::<u32>().is_err() {
            return Err(AnnotationError::Malformed {
                line: line_no,
                reason: format!("invalid token id '{id}'"),
            });
        }

        let form = fields[FORM];
        if form.is_empty() {
            return Err(AnnotationError::Malformed {
                line: line_no,
                reason: "empty FORM column".to_string(),
            });
        }

        Ok(Some(AnnotatedToken {
            text: form.to_string(),
            pos_tag: fields[self.column.index()].to_string(),
            is_named_entity: misc_marks_entity(fields[MISC]),
        }))
    }
}

fn misc_marks_entity(misc: &str) -> bool {
    if misc == "_" {
        return false;
    }

    misc.split('|').any(|attr| match attr.split_once('=') {
        Some((key, value)) => ENTITY_KEYS.contains(&key) && !value.is_empty() && value != "O",
        None => false,
    })
}

impl AnnotationProvider for ConlluAnnotator {
    fn name(&self) -> &str {
        "conllu"
    }

    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        let mut tokens = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(token) = self.parse_line(idx + 1, line)? {
                tokens.push(token);
            }
        }

        Ok(tokens)
    }
}
