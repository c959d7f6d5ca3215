//! Remote object storage for uploaded documents.
//!
//! `DocumentStore` is the seam the rest of the service talks to; production
//! wires `S3DocumentStore`, tests wire an in-memory stand-in.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("upload failed: {0}")]
    Upload(String),

    #[error("upload timed out after {0}s")]
    Timeout(u64),
}

/// Persists raw document bytes under `key` and returns a stable public URL.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn store(&self, bytes: Bytes, key: &str, content_type: &str)
        -> Result<String, StoreError>;
}

/// S3-compatible store (MinIO locally, AWS in production).
///
/// Uploads are bounded by the configured timeout and never retried here;
/// retry policy belongs to the caller's contract.
pub struct S3DocumentStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
    timeout: Duration,
}

impl S3DocumentStore {
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: String,
        endpoint: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            bucket,
            endpoint,
            timeout,
        }
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    async fn store(
        &self,
        bytes: Bytes,
        key: &str,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let upload = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send();

        match tokio::time::timeout(self.timeout, upload).await {
            Err(_) => Err(StoreError::Timeout(self.timeout.as_secs())),
            Ok(result) => {
                result.map_err(|e| StoreError::Upload(e.to_string()))?;
                info!("stored s3://{}/{}", self.bucket, key);
                Ok(public_url(&self.endpoint, &self.bucket, key))
            }
        }
    }
}

/// Path-style URL for an object, valid for MinIO and AWS endpoints alike.
pub fn public_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
}

/// Storage key for an uploaded résumé, named after the original file.
pub fn resume_key(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    format!("resumes/resume_{}.pdf", sanitize(stem))
}

/// Storage key for an uploaded logo; a UUID prefix avoids collisions.
pub fn logo_key(filename: &str) -> String {
    format!("logos/{}_{}", Uuid::new_v4(), sanitize(filename))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
