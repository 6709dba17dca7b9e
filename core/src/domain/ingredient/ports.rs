use std::future::Future;

use crate::domain::ingredient::entities::LabeledIngredient;

/// Classifies raw ingredient strings.
///
/// Returns one entry per input, in input order. A failure for a single
/// ingredient is reported as a failed entry and never aborts the batch.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientClassifier: Send + Sync {
    fn classify(
        &self,
        ingredients: Vec<String>,
    ) -> impl Future<Output = Vec<LabeledIngredient>> + Send;
}
