use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure modes of the resume extraction pipeline.
///
/// Each variant maps to a distinct user-facing message in `AppError`; all of
/// them abort the current upload; no partial structured data is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The PDF container could not be opened. Non-fatal for link extraction
    /// (the pipeline degrades to an empty link set) but fatal when the text
    /// pass hits it too.
    #[error("failed to parse PDF document: {0}")]
    DocumentParse(String),

    #[error("failed to extract text from PDF: {0}")]
    TextExtraction(String),

    /// Extraction succeeded but produced no visible characters. Checked
    /// before the model call so an unreadable scan never spends quota.
    #[error("no readable text found in PDF")]
    EmptyText,

    /// The model responded, but the payload was not a JSON object after
    /// fence stripping.
    #[error("could not parse resume content: {0}")]
    Structuring(String),

    /// Transport or API failure talking to the model. Retryable by the client.
    #[error("language model unavailable: {0}")]
    ModelUnavailable(#[from] LlmError),

    /// Normalized output carries neither a name nor an email.
    #[error("could not find contact information in resume")]
    MissingContact,
}
