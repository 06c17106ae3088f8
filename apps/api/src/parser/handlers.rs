//! Axum route handlers for the resume upload flow.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ParsedResumeData;
use crate::parser::pipeline::parse_resume;
use crate::state::AppState;
use crate::storage::{self, StoredResume};

/// Upload size cap; checked here, before the pipeline ever runs.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub file_path: String,
    pub resume_url: String,
    pub resume_filename: String,
    #[serde(flatten)]
    pub parsed: ParsedResumeData,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<StoredResume>,
}

/// POST /api/v1/resumes/upload
///
/// Multipart fields: `resume` (the PDF), `user_id` (UUID), `username`
/// (optional; used in the stored filename). Validates type and size, runs
/// retention, stores the original bytes, then runs the extraction pipeline
/// and returns the structured record for the confirmation screen.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(Vec<u8>, Option<String>)> = None;
    let mut user_id: Option<Uuid> = None;
    let mut username: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let content_type = field.content_type().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                file = Some((data.to_vec(), content_type));
            }
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read user_id: {e}")))?;
                user_id = Some(raw.trim().parse().map_err(|_| {
                    AppError::Validation("user_id must be a valid UUID".to_string())
                })?);
            }
            Some("username") => {
                // optional field: unreadable is logged, then treated as absent
                username = match field.text().await {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!("failed to read username field, falling back to user_id: {e}");
                        None
                    }
                };
            }
            _ => {}
        }
    }

    let (bytes, content_type) =
        file.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    let user_id =
        user_id.ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;

    if content_type.as_deref() != Some("application/pdf") {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    if bytes.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation(
            "File size exceeds the 5MB limit".to_string(),
        ));
    }

    let username = storage_username(username, user_id);
    let filename = format!("{}_{}.pdf", username, storage_timestamp());
    let key = format!("resumes/{user_id}/{filename}");

    storage::evict_oldest_if_full(&state.s3, &state.config.s3_bucket, user_id)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;
    storage::upload_resume(&state.s3, &state.config.s3_bucket, &key, bytes.clone())
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let parsed = parse_resume(&bytes, state.analyzer.as_ref()).await?;

    Ok(Json(UploadResponse {
        id: Uuid::new_v4(),
        resume_url: storage::public_resume_url(&state.config.s3_endpoint, &state.config.s3_bucket, &key),
        resume_filename: filename,
        file_path: key,
        parsed,
    }))
}

/// GET /api/v1/resumes?user_id=...
///
/// Lists the user's stored resume versions, oldest first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = storage::list_user_resumes(&state.s3, &state.config.s3_bucket, params.user_id)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// Stored-filename prefix: the submitted username, or the user id when the
/// field was absent, blank, or unreadable.
fn storage_username(username: Option<String>, user_id: Uuid) -> String {
    username
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| user_id.to_string())
}

/// Filesystem-safe ISO-ish timestamp for stored filenames
/// (colons and dots replaced so keys stay portable).
fn storage_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_timestamp_has_no_colons_or_dots() {
        let ts = storage_timestamp();
        assert!(!ts.contains(':'));
        assert!(!ts.contains('.'));
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn test_storage_username_falls_back_to_user_id() {
        let user_id: Uuid = "6f0a2c1e-9d34-4b8a-8a77-0e3f5c2d1ab9".parse().unwrap();
        assert_eq!(
            storage_username(Some("jane".to_string()), user_id),
            "jane"
        );
        assert_eq!(
            storage_username(Some("  jane  ".to_string()), user_id),
            "jane"
        );
        // absent or blank field degrades to the user id prefix
        assert_eq!(storage_username(None, user_id), user_id.to_string());
        assert_eq!(
            storage_username(Some("   ".to_string()), user_id),
            user_id.to_string()
        );
    }

    #[test]
    fn test_upload_response_flattens_parsed_fields() {
        let response = UploadResponse {
            id: Uuid::new_v4(),
            file_path: "resumes/u/jane.pdf".to_string(),
            resume_url: "http://localhost:9000/devdeck/resumes/u/jane.pdf".to_string(),
            resume_filename: "jane.pdf".to_string(),
            parsed: ParsedResumeData {
                name: "Jane".to_string(),
                email: "jane@test.com".to_string(),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        // parsed fields sit at the top level, matching the confirmation form
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["email"], "jane@test.com");
        assert_eq!(value["resume_filename"], "jane.pdf");
    }
}
