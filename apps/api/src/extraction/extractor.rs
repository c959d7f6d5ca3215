//! Plain-text extraction from uploaded documents.

use std::path::Path;

use thiserror::Error;

/// Declared format of an uploaded document, taken from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    /// Anything we cannot extract text from.
    Unsupported,
}

impl DocumentFormat {
    /// Case-insensitive detection from the uploaded filename extension.
    pub fn from_filename(filename: &str) -> Self {
        match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentFormat::Pdf,
            _ => DocumentFormat::Unsupported,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format")]
    UnsupportedFormat,

    #[error("text extraction failed: {0}")]
    Failed(String),
}

/// Extracts plain text from raw document bytes.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so tests can substitute
/// a canned implementation.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError>;
}

/// PDF text extraction via `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
        match format {
            DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractError::Failed(e.to_string())),
            DocumentFormat::Unsupported => Err(ExtractError::UnsupportedFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_pdf_case_insensitively() {
        assert_eq!(DocumentFormat::from_filename("resume.pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("RESUME.PDF"), DocumentFormat::Pdf);
    }

    #[test]
    fn test_non_pdf_is_unsupported() {
        assert_eq!(
            DocumentFormat::from_filename("resume.docx"),
            DocumentFormat::Unsupported
        );
        assert_eq!(
            DocumentFormat::from_filename("resume"),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_pdf_extractor_rejects_unsupported_format() {
        let err = PdfTextExtractor
            .extract_text(b"irrelevant", DocumentFormat::Unsupported)
            .unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat));
    }

    #[test]
    fn test_pdf_extractor_reports_garbage_as_failure() {
        let err = PdfTextExtractor
            .extract_text(b"definitely not a pdf", DocumentFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ExtractError::Failed(_)));
    }
}
