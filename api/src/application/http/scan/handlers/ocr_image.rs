use axum::extract::{Multipart, State};
use ingredient_scanner_core::domain::scan::{
    ports::ScanService, value_objects::ExtractIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        scan::multipart::read_image_upload,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OcrResponse {
    pub ingredients: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/ocr",
    tag = "scan",
    summary = "Extract ingredients from a label photo",
    description = "Runs OCR on the uploaded `file` and returns the parsed ingredient names without classifying or storing them",
    request_body(content_type = "multipart/form-data", description = "Label image in the `file` field"),
    responses(
        (status = 200, body = OcrResponse),
        (status = 502, description = "OCR service unavailable")
    ),
)]
pub async fn ocr_image(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    multipart: Multipart,
) -> Result<Response<OcrResponse>, ApiError> {
    let upload = read_image_upload(multipart).await?;

    tracing::debug!(
        user_id = ?identity.as_ref().map(|identity| identity.id()),
        size = upload.data.len(),
        "ocr request"
    );

    let ingredients = state
        .service
        .extract_ingredients(ExtractIngredientsInput {
            image_data: upload.data,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OcrResponse { ingredients }))
}
