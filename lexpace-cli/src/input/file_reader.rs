//! File reading utilities

use super::Document;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into a document labelled with its path
    pub fn read_document(path: &Path) -> Result<Document> {
        Ok(Document {
            source: path.display().to_string(),
            text: Self::read_text(path)?,
        })
    }

    /// Read a whole stream as UTF-8 text
    pub fn read_stream<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Read standard input into a document
    pub fn read_stdin() -> Result<Document> {
        Ok(Document {
            source: "<stdin>".to_string(),
            text: Self::read_stream(io::stdin().lock())?,
        })
    }
}
