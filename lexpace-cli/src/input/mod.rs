//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Input argument meaning "read standard input"
pub const STDIN_MARKER: &str = "-";

/// A document waiting to be tagged
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// File path or `<stdin>`
    pub source: String,
    /// Full document text
    pub text: String,
}
