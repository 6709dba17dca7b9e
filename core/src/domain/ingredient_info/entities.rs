use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_DESCRIPTION: &str = "No description found for this ingredient.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDescription {
    pub query: String,
    pub description: String,
}
