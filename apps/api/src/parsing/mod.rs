//! Resume parsing pipeline: PDF text extraction followed by heuristic field
//! inference. Stateless and synchronous; safe to share behind an `Arc` and
//! call from any number of request handlers.

pub mod extractor;
pub mod pdf;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::parsing::extractor::{ExtractedFields, FieldExtractor};
use crate::parsing::pdf::TextExtractionError;

/// Everything learned from one uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub raw_text: String,
    pub fields: ExtractedFields,
}

/// Facade over the pipeline. One instance is built at startup and captured in
/// app state; the pattern table inside it is never mutated.
pub struct ResumeParser {
    extractor: FieldExtractor,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::new(),
        }
    }

    /// Parses a PDF resume. The only failure mode is the upstream text
    /// extraction; field inference itself always succeeds.
    pub fn parse(&self, file_content: &[u8]) -> Result<ParsedResume, TextExtractionError> {
        let raw_text = pdf::extract_text(file_content)?;
        let fields = self.extractor.extract(&raw_text);
        Ok(ParsedResume { raw_text, fields })
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
