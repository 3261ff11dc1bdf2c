//! PDF text extraction, the only fallible step of the resume pipeline.
//!
//! Failures here (corrupted or encrypted files) are propagated unmodified;
//! the heuristic field extraction that follows never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextExtractionError {
    #[error("failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// Extracts the page-concatenated text of a PDF, trimmed of surrounding
/// whitespace. An empty result is valid (image-only PDFs).
pub fn extract_text(bytes: &[u8]) -> Result<String, TextExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    Ok(text.trim().to_string())
}
