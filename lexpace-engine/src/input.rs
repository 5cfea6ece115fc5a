//! Document sources for the tagger

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where a document comes from
pub enum Input {
    /// Text already in memory
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, sockets, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Short description of the source, for logs
    pub fn label(&self) -> String {
        match self {
            Input::Text(_) => "<text>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(_) => "<bytes>".to_string(),
            Input::Reader(_) => "<stream>".to_string(),
        }
    }

    /// Read the whole document as UTF-8 text
    pub fn into_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| EngineError::EncodingError(format!("Invalid UTF-8: {e}"))),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                String::from_utf8(buffer).map_err(|e| {
                    EngineError::EncodingError(format!("Invalid UTF-8 from stream: {e}"))
                })
            }
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_input() {
        assert_eq!(Input::from("Hello.").into_text().unwrap(), "Hello.");
    }

    #[test]
    fn test_bytes_input_invalid_utf8() {
        let err = Input::from_bytes(vec![0xc3, 0x28]).into_text().unwrap_err();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(Cursor::new(b"from a stream".to_vec()));
        assert_eq!(input.label(), "<stream>");
        assert_eq!(input.into_text().unwrap(), "from a stream");
    }

    #[test]
    fn test_file_input() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "on disk").unwrap();

        let input = Input::from_file(file.path());
        assert!(input.label().ends_with(&*file.path().file_name().unwrap().to_string_lossy()));
        assert_eq!(input.into_text().unwrap(), "on disk");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/doc.txt").into_text().unwrap_err();
        assert!(matches!(err, EngineError::IoError(_)));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let debug = format!("{:?}", Input::from_bytes(vec![1, 2, 3]));
        assert_eq!(debug, "Bytes(\"<3 bytes>\")");
    }
}
