use bytes::Bytes;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ScanImageInput {
    pub image_data: Bytes,
    pub file_extension: Option<String>,
    pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct ExtractIngredientsInput {
    pub image_data: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct GetScanHistoryFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GetScanInput {
    pub scan_id: Uuid,
}
