use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::{
        common::{OcrConfig, entities::app_errors::CoreError},
        ocr::ports::TextExtractor,
    },
    infrastructure::http_client::client_with_timeout,
};

/// Client for an OCR sidecar.
///
/// Sends `{"image": <base64>, "language": ".."}` and expects `{"lines": [..]}`.
#[derive(Debug, Clone)]
pub struct HttpTextExtractor {
    endpoint: String,
    language: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct OcrRequest<'a> {
    image: String,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    lines: Vec<String>,
}

impl HttpTextExtractor {
    pub fn new(config: OcrConfig) -> Result<Self, anyhow::Error> {
        Ok(Self {
            client: client_with_timeout(Duration::from_secs(config.timeout_secs))?,
            endpoint: config.endpoint,
            language: config.language,
        })
    }
}

impl TextExtractor for HttpTextExtractor {
    #[instrument(skip(self, image_data), fields(size = image_data.len()))]
    async fn extract_text(&self, image_data: Bytes) -> Result<Vec<String>, CoreError> {
        if image_data.is_empty() {
            return Err(CoreError::Invalid("image is empty".to_string()));
        }

        let request = OcrRequest {
            image: general_purpose::STANDARD.encode(&image_data),
            language: &self.language,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OCR request failed: {}", e);
                CoreError::ExternalServiceError(format!("OCR error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OCR service error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "OCR service returned error: {} - {}",
                status, error_text
            )));
        }

        let ocr_response: OcrResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OCR response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse OCR response: {}", e))
        })?;

        tracing::debug!(lines = ocr_response.lines.len(), "OCR completed");

        Ok(ocr_response.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(endpoint: &str) -> HttpTextExtractor {
        HttpTextExtractor::new(OcrConfig {
            endpoint: endpoint.to_string(),
            language: "en".to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn empty_image_is_rejected_before_any_request() {
        let result = extractor("http://127.0.0.1:9/ocr")
            .extract_text(Bytes::new())
            .await;

        assert_eq!(result, Err(CoreError::Invalid("image is empty".to_string())));
    }

    #[tokio::test]
    async fn unreachable_service_is_an_external_error() {
        let result = extractor("http://127.0.0.1:9/ocr")
            .extract_text(Bytes::from_static(b"\x89PNG"))
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn silent_service_times_out() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/ocr", listener.local_addr().unwrap());

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            extractor(&endpoint).extract_text(Bytes::from_static(b"\x89PNG")),
        )
        .await
        .expect("OCR call should give up on a silent service");

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        drop(listener);
    }

    #[test]
    fn missing_lines_default_to_empty() {
        let response: OcrResponse = serde_json::from_str("{}").unwrap();
        assert!(response.lines.is_empty());
    }
}
