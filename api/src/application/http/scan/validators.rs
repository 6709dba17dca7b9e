use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "ingredients must contain between 1 and 200 entries"
    ))]
    #[schema(example = json!(["sugar", "palm oil", "salt"]))]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetScanHistoryParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientParams {
    #[validate(length(min = 1, max = 100, message = "q must be between 1 and 100 characters"))]
    #[schema(example = "msg")]
    pub q: String,
}
