//! Multipart plumbing shared by the upload endpoints, plus the standalone
//! logo upload route (store-and-return-URL, no matching involved).

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::storage;

/// One file pulled out of a multipart request.
pub struct FileUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Reads the `file` field from a multipart request.
///
/// Other fields are ignored; a request without a `file` field fails with
/// `NoFile`.
pub async fn read_file_field(mut multipart: Multipart) -> Result<FileUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Multipart(e.to_string()))?;
        info!("received file {filename:?} ({} bytes)", bytes.len());
        return Ok(FileUpload { filename, bytes });
    }
    Err(AppError::NoFile)
}

#[derive(Debug, Serialize)]
pub struct UploadLogoResponse {
    pub message: String,
    pub logo_url: String,
}

/// POST /upload-logo
///
/// Unlike parse-resume, storage failure here is fatal: the URL is the entire
/// point of the endpoint.
pub async fn handle_upload_logo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadLogoResponse>, AppError> {
    let upload = read_file_field(multipart).await?;
    let key = storage::logo_key(&upload.filename);
    let logo_url = state
        .store
        .store(upload.bytes, &key, "application/octet-stream")
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

    Ok(Json(UploadLogoResponse {
        message: "File uploaded successfully".to_string(),
        logo_url,
    }))
}
