use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    scan::ports::ImageStoragePort,
};

/// S3-compatible store for uploaded label images.
///
/// All images live in a single `{prefix}-scans` bucket.
#[derive(Clone)]
pub struct MinioImageStorage {
    client: Client,
    bucket: String,
}

impl MinioImageStorage {
    /// Builds the client without touching the network; call
    /// [`MinioImageStorage::ensure_bucket`] before the first upload.
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "ingredient-scanner",
        );

        let endpoint = endpoint_url(&config.endpoint, config.use_ssl);

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            use_ssl = config.use_ssl,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: format!("{}-scans", config.bucket_prefix),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub async fn ensure_bucket(&self) -> Result<(), anyhow::Error> {
        if self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok()
        {
            return Ok(());
        }

        tracing::info!(bucket = %self.bucket, "Creating image bucket");

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, bucket = %self.bucket, "Failed to create bucket");
                anyhow::anyhow!("failed to create bucket {}: {}", self.bucket, e)
            })?;

        Ok(())
    }
}

impl ImageStoragePort for MinioImageStorage {
    #[instrument(skip(self, payload))]
    async fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            size = payload_size,
            content_type = %content_type,
            "Uploading scan image"
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                let error_msg = e.to_string();
                let error_kind = if error_msg.contains("dispatch failure") {
                    "HTTP client dispatch failure - check endpoint URL and network connectivity"
                } else if error_msg.contains("timeout") {
                    "Request timeout - check network connection and MinIO server status"
                } else {
                    "Unknown error"
                };

                tracing::error!(
                    error = %e,
                    error_kind = %error_kind,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload scan image"
                );
                CoreError::ObjectStorageError(format!(
                    "Failed to upload image: {} ({})",
                    e, error_kind
                ))
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_image(&self, object_key: &str) -> Result<(), CoreError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to delete scan image"
                );
                CoreError::ObjectStorageError(format!("Failed to delete image: {}", e))
            })?;

        Ok(())
    }
}

/// The scheme follows `use_ssl`, whatever the configured endpoint says.
fn endpoint_url(endpoint: &str, use_ssl: bool) -> String {
    let host = endpoint
        .trim()
        .trim_end_matches('/')
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let scheme = if use_ssl { "https" } else { "http" };

    format!("{}://{}", scheme, host)
}
