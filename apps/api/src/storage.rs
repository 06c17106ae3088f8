//! S3 resume store: per-user folders of uploaded PDF versions.
//!
//! Keys follow `resumes/{user_id}/{username}_{timestamp}.pdf`. Each user
//! keeps at most `MAX_STORED_VERSIONS` files; the oldest is evicted before a
//! new upload lands.

use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Stored resume versions retained per user.
pub const MAX_STORED_VERSIONS: usize = 4;

/// One stored resume version, as surfaced by the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StoredResume {
    pub key: String,
    pub filename: String,
    pub size: i64,
    pub last_modified: Option<DateTime<Utc>>,
}

fn user_prefix(user_id: Uuid) -> String {
    format!("resumes/{user_id}/")
}

/// Lists a user's stored resume versions, oldest first.
pub async fn list_user_resumes(
    s3: &S3Client,
    bucket: &str,
    user_id: Uuid,
) -> Result<Vec<StoredResume>> {
    let output = s3
        .list_objects_v2()
        .bucket(bucket)
        .prefix(user_prefix(user_id))
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 list failed: {e}"))?;

    let mut resumes: Vec<StoredResume> = output
        .contents()
        .iter()
        .map(|obj| {
            let key = obj.key().unwrap_or_default().to_string();
            StoredResume {
                filename: key.rsplit('/').next().unwrap_or_default().to_string(),
                size: obj.size().unwrap_or_default(),
                last_modified: obj
                    .last_modified()
                    .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
                key,
            }
        })
        .collect();

    sort_oldest_first(&mut resumes);
    Ok(resumes)
}

/// Deletes the user's oldest version once the retention cap is reached.
///
/// List-then-delete is not atomic: two concurrent uploads by the same user
/// can each pass the count check and leave an extra version behind. S3 has
/// no conditional list-and-evict, so the drift is accepted and logged.
pub async fn evict_oldest_if_full(s3: &S3Client, bucket: &str, user_id: Uuid) -> Result<()> {
    let existing = list_user_resumes(s3, bucket, user_id).await?;
    if existing.len() >= MAX_STORED_VERSIONS {
        if let Some(oldest) = existing.first() {
            s3.delete_object()
                .bucket(bucket)
                .key(&oldest.key)
                .send()
                .await
                .map_err(|e| anyhow::anyhow!("S3 delete failed: {e}"))?;
            info!("evicted oldest stored resume {}", oldest.key);
        }
    }
    Ok(())
}

/// Uploads the original resume bytes under the given key.
pub async fn upload_resume(s3: &S3Client, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<()> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(bytes))
        .content_type("application/pdf")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

    info!("uploaded resume to s3://{bucket}/{key}");
    Ok(())
}

/// Path-style public URL for a stored object (MinIO-compatible).
pub fn public_resume_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/'))
}

fn sort_oldest_first(resumes: &mut [StoredResume]) {
    // objects without a timestamp sort first and are evicted earliest
    resumes.sort_by_key(|r| r.last_modified);
}
