use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    ingredient::entities::LabeledIngredient,
    recommendation::entities::{PipelineResult, RecommendationTag},
};

/// One persisted scan request. History is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Scan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_object_key: Option<String>,
    pub ingredients_text: String,
    pub ingredients: Vec<LabeledIngredient>,
    pub recommendation: RecommendationTag,
    pub health_score: i32,
    pub created_at: DateTime<Utc>,
}

impl Scan {
    pub fn new(
        user_id: Uuid,
        image_object_key: Option<String>,
        raw_ingredients: &[String],
        ingredients: Vec<LabeledIngredient>,
        result: &PipelineResult,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            image_object_key,
            ingredients_text: raw_ingredients.join(", "),
            ingredients,
            recommendation: result.recommendation,
            health_score: i32::from(result.health_score),
            created_at: now,
        }
    }
}

/// What a scan request hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanAnalysis {
    pub scan_id: Uuid,
    pub ingredients: Vec<LabeledIngredient>,
    pub result: PipelineResult,
}
