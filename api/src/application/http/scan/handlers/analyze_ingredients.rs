use axum::extract::State;
use ingredient_scanner_core::domain::{
    ingredient::entities::LabeledIngredient,
    recommendation::entities::{RecommendationTag, Suitability},
    scan::{entities::ScanAnalysis, ports::ScanService, value_objects::AnalyzeIngredientsInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::AnalyzeIngredientsRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub scan_id: Uuid,
    pub ingredients: Vec<LabeledIngredient>,
    pub recommendation: RecommendationTag,
    #[schema(example = "⚠ Consume in Moderation")]
    pub recommendation_label: String,
    pub reasons: Vec<String>,
    pub top_offenders: Vec<String>,
    #[schema(minimum = 0, maximum = 10)]
    pub health_score: u8,
    pub suitability: Suitability,
}

impl From<ScanAnalysis> for AnalyzeResponse {
    fn from(analysis: ScanAnalysis) -> Self {
        let result = analysis.result;

        Self {
            scan_id: analysis.scan_id,
            ingredients: analysis.ingredients,
            recommendation: result.recommendation,
            recommendation_label: result.recommendation.display_label(),
            reasons: result.reasons,
            top_offenders: result.top_offenders,
            health_score: result.health_score,
            suitability: result.suitability,
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "scan",
    summary = "Analyze an ingredient list",
    description = "Classifies each ingredient, scores the product and records the scan in the caller's history",
    responses(
        (status = 200, body = AnalyzeResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    request_body = AnalyzeIngredientsRequest,
    security(("bearer" = []))
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_ingredients(
            identity,
            AnalyzeIngredientsInput {
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeResponse::from(analysis)))
}
