use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Reads text out of an image.
///
/// Returns the recognized text segments in reading order.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract_text(
        &self,
        image_data: Bytes,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
