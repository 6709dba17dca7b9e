use axum::extract::{Query, State};
use ingredient_scanner_core::domain::scan::{
    entities::Scan, ports::ScanService, value_objects::GetScanHistoryFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::GetScanHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScanHistoryResponse {
    pub data: Vec<Scan>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "scan",
    summary = "Get scan history",
    description = "Lists the caller's scans, newest first",
    params(GetScanHistoryParams),
    responses(
        (status = 200, body = GetScanHistoryResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_scan_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetScanHistoryParams>,
) -> Result<Response<GetScanHistoryResponse>, ApiError> {
    let scans = state
        .service
        .get_scan_history(
            identity,
            GetScanHistoryFilter {
                offset: params.offset,
                limit: params.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScanHistoryResponse { data: scans }))
}
