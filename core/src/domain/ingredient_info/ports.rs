use std::future::Future;

use crate::domain::{
    authentication::entities::Identity, common::entities::app_errors::CoreError,
    ingredient_info::entities::IngredientDescription,
};

/// Reference descriptions keyed by lower-cased ingredient name.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientInfoRepository: Send + Sync {
    fn describe(
        &self,
        ingredient: &str,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

pub trait IngredientInfoService: Send + Sync {
    fn search_ingredient(
        &self,
        identity: Identity,
        query: String,
    ) -> impl Future<Output = Result<IngredientDescription, CoreError>> + Send;
}
