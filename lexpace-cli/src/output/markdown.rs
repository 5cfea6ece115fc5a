//! Markdown output formatter

use super::{escape_whitespace, OutputFormatter, TaggedDocument};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            token_count: 0,
        }
    }
}

fn escape_cell(token: &str) -> String {
    escape_whitespace(token).replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &TaggedDocument) -> Result<()> {
        self.document_count += 1;
        self.token_count += document.tokens.len();

        writeln!(self.writer, "## {}", document.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Token | Category |")?;
        writeln!(self.writer, "|---|-------|----------|")?;
        for (idx, (token, category)) in document.pairs().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                idx + 1,
                escape_cell(token),
                category
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total documents: {}, tokens: {}*",
            self.document_count, self.token_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
