use axum::extract::{Multipart, State};
use ingredient_scanner_core::domain::scan::{ports::ScanService, value_objects::ScanImageInput};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::{handlers::analyze_ingredients::AnalyzeResponse, multipart::read_image_upload},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/full-scan",
    tag = "scan",
    summary = "Scan a label photo end to end",
    description = "Reads the ingredient list from the uploaded `file`, stores the image, analyzes the ingredients and records the scan",
    request_body(content_type = "multipart/form-data", description = "Label image in the `file` field"),
    responses(
        (status = 200, body = AnalyzeResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 502, description = "OCR or storage service unavailable")
    ),
    security(("bearer" = []))
)]
pub async fn full_scan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    let upload = read_image_upload(multipart).await?;

    let analysis = state
        .service
        .full_scan(
            identity,
            ScanImageInput {
                image_data: upload.data,
                file_extension: upload.file_extension,
                content_type: upload.content_type,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeResponse::from(analysis)))
}
