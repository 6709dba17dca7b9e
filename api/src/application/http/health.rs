use axum::{Json, Router, extract::State, routing::get};
use ingredient_scanner_core::domain::health::{
    entities::DatabaseHealthStatus, ports::HealthCheckService,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    pub status: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Ingredient Scanner API is live 🎉".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn live() -> Response<LivenessResponse> {
    Response::OK(LivenessResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Checks that the database answers",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unavailable")
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(|e| {
        tracing::warn!("Readiness check failed: {}", e);
        ApiError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Response::OK(status))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
