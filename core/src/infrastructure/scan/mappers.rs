use tracing::warn;

use crate::{
    domain::{
        ingredient::entities::LabeledIngredient,
        recommendation::{entities::RecommendationTag, services::generate_recommendation},
        scan::entities::Scan,
    },
    entity::scans,
};

impl From<&scans::Model> for Scan {
    fn from(model: &scans::Model) -> Self {
        let ingredients: Vec<LabeledIngredient> =
            serde_json::from_value(model.result_json.clone()).unwrap_or_else(|e| {
                warn!(scan_id = %model.id, "Stored ingredients are unreadable: {}", e);
                Vec::new()
            });

        let recommendation = RecommendationTag::try_from(model.recommendation.as_str())
            .unwrap_or_else(|e| {
                warn!(scan_id = %model.id, "Stored recommendation is unreadable: {}", e);
                generate_recommendation(&ingredients).tag
            });

        Self {
            id: model.id,
            user_id: model.user_id,
            image_object_key: model.image_object_key.clone(),
            ingredients_text: model.ingredients_text.clone(),
            ingredients,
            recommendation,
            health_score: model.health_score,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<scans::Model> for Scan {
    fn from(model: scans::Model) -> Self {
        Self::from(&model)
    }
}
