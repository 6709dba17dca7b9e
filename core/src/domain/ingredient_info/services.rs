use tracing::debug;

use crate::domain::{
    authentication::{entities::Identity, ports::TokenIssuer},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientClassifier,
    ingredient_info::{
        entities::{IngredientDescription, NO_DESCRIPTION},
        ports::{IngredientInfoRepository, IngredientInfoService},
    },
    ocr::ports::TextExtractor,
    scan::ports::{ImageStoragePort, ScanRepository},
    user::ports::UserRepository,
};

impl<U, S, CL, TX, IS, II, HC, T> IngredientInfoService for Service<U, S, CL, TX, IS, II, HC, T>
where
    U: UserRepository,
    S: ScanRepository,
    CL: IngredientClassifier,
    TX: TextExtractor,
    IS: ImageStoragePort,
    II: IngredientInfoRepository,
    HC: HealthCheckRepository,
    T: TokenIssuer,
{
    async fn search_ingredient(
        &self,
        identity: Identity,
        query: String,
    ) -> Result<IngredientDescription, CoreError> {
        let description = self
            .ingredient_info_repository
            .describe(&query.to_lowercase())
            .await?;

        debug!(user_id = %identity.id(), query = %query, found = description.is_some(), "ingredient search");

        Ok(IngredientDescription {
            query,
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        })
    }
}
