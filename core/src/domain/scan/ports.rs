use std::future::Future;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    authentication::entities::Identity,
    common::entities::app_errors::CoreError,
    scan::{
        entities::{Scan, ScanAnalysis},
        value_objects::{
            AnalyzeIngredientsInput, ExtractIngredientsInput, GetScanHistoryFilter, GetScanInput,
            ScanImageInput,
        },
    },
};

/// Repository trait for scan history
#[cfg_attr(test, mockall::automock)]
pub trait ScanRepository: Send + Sync {
    fn create_scan(&self, scan: Scan) -> impl Future<Output = Result<Scan, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetScanHistoryFilter,
    ) -> impl Future<Output = Result<Vec<Scan>, CoreError>> + Send;

    fn get_by_id(
        &self,
        scan_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Scan>, CoreError>> + Send;
}

/// Port for storing uploaded label images
#[cfg_attr(test, mockall::automock)]
pub trait ImageStoragePort: Send + Sync {
    fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_image(&self, object_key: &str)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for scan orchestration
pub trait ScanService: Send + Sync {
    fn extract_ingredients(
        &self,
        input: ExtractIngredientsInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn analyze_ingredients(
        &self,
        identity: Identity,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<ScanAnalysis, CoreError>> + Send;

    fn full_scan(
        &self,
        identity: Identity,
        input: ScanImageInput,
    ) -> impl Future<Output = Result<ScanAnalysis, CoreError>> + Send;

    fn get_scan_history(
        &self,
        identity: Identity,
        filter: GetScanHistoryFilter,
    ) -> impl Future<Output = Result<Vec<Scan>, CoreError>> + Send;

    fn get_scan(
        &self,
        identity: Identity,
        input: GetScanInput,
    ) -> impl Future<Output = Result<Scan, CoreError>> + Send;
}
