//! Orchestration for a single parse-resume request: extract text, persist
//! the original document, tokenize, match skills.

use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::extractor::{DocumentFormat, ExtractError, TextExtractor};
use crate::matching::matcher::match_phrases;
use crate::matching::tokenizer::tokenize;
use crate::matching::vocabulary::CompiledVocabulary;
use crate::storage::{self, DocumentStore};

/// Result of parsing one résumé.
///
/// `resume_url` is `None` when the upload to the document store failed; the
/// skills are still returned (see `parse_resume`).
#[derive(Debug)]
pub struct ExtractionOutcome {
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
}

/// Parses one résumé end to end.
///
/// Storage failure does not fail the request: the document store is not on
/// the critical path for extraction, so a failed upload logs a warning and
/// the response carries no URL. Extraction failures are fatal because there
/// is nothing to match without text.
pub async fn parse_resume(
    extractor: &dyn TextExtractor,
    store: &dyn DocumentStore,
    vocabulary: &CompiledVocabulary,
    filename: &str,
    bytes: Bytes,
) -> Result<ExtractionOutcome, AppError> {
    let format = DocumentFormat::from_filename(filename);
    let text = extractor
        .extract_text(&bytes, format)
        .map_err(|e| match e {
            ExtractError::UnsupportedFormat => AppError::UnsupportedFormat(filename.to_string()),
            ExtractError::Failed(msg) => AppError::ExtractionFailed(msg),
        })?;
    if text.trim().is_empty() {
        return Err(AppError::ExtractionFailed(
            "document contains no extractable text".to_string(),
        ));
    }

    let key = storage::resume_key(filename);
    let resume_url = match store.store(bytes, &key, "application/pdf").await {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("resume upload failed, continuing without URL: {e}");
            None
        }
    };

    let tokens = tokenize(&text);
    let mut skills: Vec<String> = match_phrases(vocabulary, &tokens)
        .into_iter()
        .map(String::from)
        .collect();
    skills.sort_unstable();
    info!(
        "matched {} skills across {} tokens ({filename})",
        skills.len(),
        tokens.len()
    );

    Ok(ExtractionOutcome { skills, resume_url })
}
