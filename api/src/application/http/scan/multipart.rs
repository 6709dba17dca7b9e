use axum::extract::Multipart;
use bytes::Bytes;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const IMAGE_FIELD: &str = "file";

#[derive(Debug)]
pub struct ImageUpload {
    pub data: Bytes,
    pub file_extension: Option<String>,
    pub content_type: String,
}

/// Reads the `file` field of a multipart upload.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<ImageUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_extension = field.file_name().and_then(file_extension);
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        return Ok(ImageUpload {
            data,
            file_extension,
            content_type,
        });
    }

    Err(ApiError::BadRequest("Missing file field".to_string()))
}

fn file_extension(file_name: &str) -> Option<String> {
    let (_, extension) = file_name.rsplit_once('.')?;

    (!extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric()))
        .then(|| extension.to_ascii_lowercase())
}
