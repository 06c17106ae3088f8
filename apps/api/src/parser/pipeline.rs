//! Pipeline Orchestrator: sequences the extraction stages for one upload.
//!
//! Stateless across calls; every invocation owns its buffers and produces
//! either a fresh `ParsedResumeData` or a `ParseError`, never partial data.

use chrono::{Datelike, Utc};
use tracing::{debug, warn};

use crate::models::resume::ParsedResumeData;
use crate::parser::error::ParseError;
use crate::parser::links::extract_embedded_links;
use crate::parser::normalize::normalize;
use crate::parser::social::resolve_social_links;
use crate::parser::structuring::{structure_resume, ResumeAnalyzer};
use crate::parser::text::extract_text;

/// Runs the full pipeline over an uploaded PDF.
///
/// The caller has already enforced content type and the 5 MiB size cap;
/// the buffer is fully memory-resident.
pub async fn parse_resume(
    pdf_bytes: &[u8],
    analyzer: &dyn ResumeAnalyzer,
) -> Result<ParsedResumeData, ParseError> {
    // A document whose annotations can't be walked may still extract text;
    // link extraction failure degrades to an empty evidence set.
    let embedded_links = match extract_embedded_links(pdf_bytes) {
        Ok(links) => links,
        Err(e) => {
            warn!("embedded link extraction failed, continuing without annotations: {e}");
            Vec::new()
        }
    };

    let text = extract_text(pdf_bytes)?;
    if text.trim().is_empty() {
        // abort before spending a model call on an unreadable document
        return Err(ParseError::EmptyText);
    }
    debug!(
        chars = text.len(),
        embedded_links = embedded_links.len(),
        "extracted resume text"
    );

    let fallback_links = resolve_social_links(&text, &embedded_links);
    let raw = structure_resume(analyzer, &text, &embedded_links).await?;
    let parsed = normalize(&raw, &fallback_links, &embedded_links, Utc::now().year());

    if parsed.name.is_empty() && parsed.email.is_empty() {
        return Err(ParseError::MissingContact);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::fixtures::{build_pdf, text_pdf, Page};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned analyzer: returns a fixed reply and counts invocations.
    struct CannedAnalyzer {
        reply: String,
        calls: AtomicUsize,
    }

    impl CannedAnalyzer {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResumeAnalyzer for CannedAnalyzer {
        async fn analyze(&self, _prompt: &str, _system: &str) -> Result<String, ParseError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_blank_document_aborts_before_model_call() {
        let analyzer = CannedAnalyzer::new("{}");
        let pdf = text_pdf(&[]);
        let result = parse_resume(&pdf, &analyzer).await;
        assert!(matches!(result, Err(ParseError::EmptyText)));
        assert_eq!(analyzer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_document_aborts_before_model_call() {
        let analyzer = CannedAnalyzer::new("{}");
        let pdf = text_pdf(&["   "]);
        let result = parse_resume(&pdf, &analyzer).await;
        assert!(matches!(result, Err(ParseError::EmptyText)));
        assert_eq!(analyzer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_model_json_yields_no_partial_data() {
        let analyzer = CannedAnalyzer::new("```json {invalid} ```");
        let pdf = text_pdf(&["Jane Doe", "jane@test.com"]);
        let result = parse_resume(&pdf, &analyzer).await;
        assert!(matches!(result, Err(ParseError::Structuring(_))));
        assert_eq!(analyzer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_contact_rejected() {
        let analyzer = CannedAnalyzer::new(r#"{"skills": ["Rust"]}"#);
        let pdf = text_pdf(&["An entirely anonymous resume"]);
        let result = parse_resume(&pdf, &analyzer).await;
        assert!(matches!(result, Err(ParseError::MissingContact)));
    }

    #[tokio::test]
    async fn test_single_identity_field_is_enough() {
        let analyzer = CannedAnalyzer::new(r#"{"email": "jane@test.com"}"#);
        let pdf = text_pdf(&["jane@test.com"]);
        let parsed = parse_resume(&pdf, &analyzer).await.unwrap();
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.email, "jane@test.com");
    }

    #[tokio::test]
    async fn test_end_to_end_pattern_match_fills_model_gap() {
        // Model finds the identity but reports no github_url; tier 2 of the
        // heuristic cascade recovers it from the visible text.
        let analyzer = CannedAnalyzer::new(
            r#"{
                "name": "Jane Doe",
                "email": "jane.doe@test.com",
                "skills": ["Go", "Rust"],
                "achievements": ["Won hackathon"],
                "github_url": null
            }"#,
        );
        let pdf = text_pdf(&[
            "Jane Doe",
            "jane.doe@test.com",
            "Skills: Go, Rust",
            "Achievements:",
            "- Won hackathon",
            "GitHub: github.com/janedoe",
        ]);

        let parsed = parse_resume(&pdf, &analyzer).await.unwrap();
        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.email, "jane.doe@test.com");
        assert_eq!(parsed.skills, vec!["Go", "Rust"]);
        assert_eq!(parsed.achievements, vec!["Won hackathon"]);
        assert_eq!(
            parsed.github_url.as_deref(),
            Some("https://github.com/janedoe")
        );
        assert_eq!(parsed.year, None);
        assert!(parsed.extracted_links.is_empty());
    }

    #[tokio::test]
    async fn test_embedded_annotation_links_reach_the_output() {
        let analyzer = CannedAnalyzer::new(r#"{"name": "Jane Doe", "email": "jane@test.com"}"#);
        let pdf = build_pdf(&[Page {
            lines: &["Jane Doe", "jane@test.com"],
            link_uris: &["https://github.com/janedoe", "https://janedoe.dev"],
        }]);

        let parsed = parse_resume(&pdf, &analyzer).await.unwrap();
        // tier 1: annotation evidence resolves github directly
        assert_eq!(
            parsed.github_url.as_deref(),
            Some("https://github.com/janedoe")
        );
        assert_eq!(
            parsed.extracted_links,
            vec!["https://github.com/janedoe", "https://janedoe.dev"]
        );
    }
}
