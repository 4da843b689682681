use std::path::Path;
use thiserror::Error;

/// Errors raised at the text-extraction boundary
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File format no extractor understands
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// IO error while reading the source file
    #[error("Error reading document: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracted document text plus a free-form metadata string
#[derive(Debug, Clone)]
pub struct Extracted {
    pub text: String,
    pub metadata: String,
}

/// Boundary trait for turning a file into raw text.
///
/// PDF and DOCX extraction live outside this crate; implementations of this
/// trait are external collaborators the store calls through. Failures are
/// non-retryable and propagate unchanged.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<Extracted, ExtractError>;
}

/// Extractor for plain-text files (`.txt`, `.md`, `.text`)
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<Extracted, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if !matches!(ext.as_str(), "txt" | "md" | "text") {
            return Err(ExtractError::UnsupportedFormat(format!(".{ext}")));
        }

        let text = std::fs::read_to_string(path)?;
        let metadata = format!("Characters: {}", text.chars().count());
        Ok(Extracted { text, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extracts_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "hello extractor").unwrap();

        let extracted = PlainTextExtractor.extract(file.path()).unwrap();
        assert_eq!(extracted.text, "hello extractor");
        assert_eq!(extracted.metadata, "Characters: 15");
    }

    #[test]
    fn test_rejects_unknown_format() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let err = PlainTextExtractor.extract(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ext) if ext == ".pdf"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PlainTextExtractor
            .extract(Path::new("/nonexistent/notes.txt"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
