//! Crate-wide error type.
//!
//! Only two things can fail here: provisioning the language model at
//! startup, and pulling text out of an uploaded file. Every analysis
//! transform is a total function once the model is loaded.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The linguistic model failed to initialize. Fatal: no transform can
    /// degrade gracefully without it.
    #[error("language model unavailable: {0}")]
    ModelUnavailable(String),

    /// The uploaded file has an extension we don't extract text from.
    #[error("unsupported file format '{extension}': expected .txt, .pdf, or .docx")]
    UnsupportedFormat { extension: String },

    /// IO errors while reading an uploaded file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF parser rejected the file.
    #[error("pdf extraction failed: {0}")]
    PdfExtraction(String),

    /// The DOCX parser rejected the file.
    #[error("docx parse failed: {0}")]
    DocxParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message_names_extension() {
        let err = Error::UnsupportedFormat {
            extension: "pptx".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pptx"));
        assert!(msg.contains(".pdf"));
    }

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> Result<Vec<u8>> {
            Ok(std::fs::read("/definitely/not/a/real/path")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));
    }
}
