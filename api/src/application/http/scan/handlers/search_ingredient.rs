use axum::extract::{Query, State};
use ingredient_scanner_core::domain::ingredient_info::{
    entities::IngredientDescription, ports::IngredientInfoService,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::SearchIngredientParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/search",
    tag = "scan",
    summary = "Describe an ingredient",
    params(SearchIngredientParams),
    responses(
        (status = 200, body = IngredientDescription)
    ),
    security(("bearer" = []))
)]
pub async fn search_ingredient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<SearchIngredientParams>,
) -> Result<Response<IngredientDescription>, ApiError> {
    params
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let description = state
        .service
        .search_ingredient(identity, params.q)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(description))
}
