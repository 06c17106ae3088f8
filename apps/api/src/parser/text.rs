//! Text Extractor: page-concatenated visible text from the uploaded PDF.

use crate::parser::error::ParseError;

/// Extracts all visible text across pages in page order.
///
/// Corrupt documents fail with `TextExtraction`, which is fatal to the whole
/// pipeline; nothing can be structured without text. The emptiness check
/// lives in the orchestrator, which aborts before spending a model call.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, ParseError> {
    pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| ParseError::TextExtraction(e.to_string()))
}
