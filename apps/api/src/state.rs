use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::config::Config;
use crate::parser::structuring::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    /// Pluggable structuring backend. Production wires `LlmAnalyzer`;
    /// tests substitute canned analyzers.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub config: Config,
}
