//! Model-Backed Structuring Engine: one LLM call per resume, returning the
//! untrusted intermediate JSON object that only the normalizer may consume.

use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::parser::error::ParseError;
use crate::parser::prompts::{RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM};

/// Pluggable structuring backend. Production wires `LlmAnalyzer`; tests
/// substitute a canned implementation so the pipeline runs offline.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Sends the finished prompt to the model and returns its raw text reply.
    async fn analyze(&self, prompt: &str, system: &str) -> Result<String, ParseError>;
}

/// Production analyzer backed by the Anthropic client.
pub struct LlmAnalyzer {
    llm: LlmClient,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmAnalyzer {
    async fn analyze(&self, prompt: &str, system: &str) -> Result<String, ParseError> {
        let response = self.llm.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}

/// Embeds the resume text and the embedded-link evidence into the
/// extraction prompt.
pub fn build_prompt(text: &str, embedded_links: &[String]) -> String {
    let links = if embedded_links.is_empty() {
        "(none)".to_string()
    } else {
        embedded_links.join("\n")
    };
    RESUME_PARSE_PROMPT
        .replace("{resume_text}", text)
        .replace("{embedded_links}", &links)
}

/// Strips markdown fences and parses the reply as a single JSON object.
/// Anything else is a `Structuring` failure, fatal and never retried.
pub fn parse_model_response(raw: &str) -> Result<Value, ParseError> {
    let stripped = strip_json_fences(raw);
    let value: Value =
        serde_json::from_str(stripped).map_err(|e| ParseError::Structuring(e.to_string()))?;
    if !value.is_object() {
        return Err(ParseError::Structuring(
            "model response is not a JSON object".to_string(),
        ));
    }
    Ok(value)
}

/// One structuring attempt: build prompt, call the model, parse the reply.
pub async fn structure_resume(
    analyzer: &dyn ResumeAnalyzer,
    text: &str,
    embedded_links: &[String],
) -> Result<Value, ParseError> {
    let prompt = build_prompt(text, embedded_links);
    let raw = analyzer.analyze(&prompt, RESUME_PARSE_SYSTEM).await?;
    parse_model_response(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_text_and_links() {
        let links = vec!["https://github.com/jane".to_string()];
        let prompt = build_prompt("Jane Doe\nRust developer", &links);
        assert!(prompt.contains("Jane Doe\nRust developer"));
        assert!(prompt.contains("https://github.com/jane"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{embedded_links}"));
    }

    #[test]
    fn test_build_prompt_marks_missing_links() {
        let prompt = build_prompt("text", &[]);
        assert!(prompt.contains("(none)"));
    }

    #[test]
    fn test_parse_fenced_json_object() {
        let value = parse_model_response("```json\n{\"name\": \"Jane\"}\n```").unwrap();
        assert_eq!(value["name"], "Jane");
    }

    #[test]
    fn test_parse_bare_json_object() {
        let value = parse_model_response("{\"email\": \"a@b.co\"}").unwrap();
        assert_eq!(value["email"], "a@b.co");
    }

    #[test]
    fn test_fenced_invalid_json_is_structuring_error() {
        let result = parse_model_response("```json {invalid} ```");
        assert!(matches!(result, Err(ParseError::Structuring(_))));
    }

    #[test]
    fn test_non_object_json_is_structuring_error() {
        let result = parse_model_response("[1, 2, 3]");
        assert!(matches!(result, Err(ParseError::Structuring(_))));
    }

    #[test]
    fn test_prose_reply_is_structuring_error() {
        let result = parse_model_response("I could not find a resume in this text.");
        assert!(matches!(result, Err(ParseError::Structuring(_))));
    }
}
