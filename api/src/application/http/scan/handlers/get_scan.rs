use axum::extract::{Path, State};
use ingredient_scanner_core::domain::scan::{
    entities::Scan, ports::ScanService, value_objects::GetScanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScanResponse {
    pub data: Scan,
}

#[utoipa::path(
    get,
    path = "/history/{scan_id}",
    tag = "scan",
    summary = "Get one scan",
    params(
        ("scan_id" = Uuid, Path, description = "Scan ID"),
    ),
    responses(
        (status = 200, body = GetScanResponse),
        (status = 404, description = "Scan not found for this user")
    ),
    security(("bearer" = []))
)]
pub async fn get_scan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(scan_id): Path<Uuid>,
) -> Result<Response<GetScanResponse>, ApiError> {
    let scan = state
        .service
        .get_scan(identity, GetScanInput { scan_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScanResponse { data: scan }))
}
