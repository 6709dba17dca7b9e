use std::time::Duration;

use futures::{StreamExt, stream};
use reqwest::Client;
use serde::Serialize;

use crate::{
    domain::ingredient::{
        entities::{IngredientLabels, LabeledIngredient},
        ports::IngredientClassifier,
    },
    infrastructure::http_client::client_with_timeout,
};

/// Client for a model server exposing one prediction per ingredient.
///
/// `POST {endpoint}` with `{"ingredient": "..."}` answers with the four labels.
#[derive(Debug, Clone)]
pub struct RemoteIngredientClassifier {
    endpoint: String,
    concurrency: usize,
    client: Client,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    ingredient: &'a str,
}

impl RemoteIngredientClassifier {
    pub fn new(
        endpoint: String,
        concurrency: usize,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            endpoint,
            concurrency: concurrency.max(1),
            client: client_with_timeout(timeout)?,
        })
    }

    async fn predict(&self, ingredient: &str) -> Result<IngredientLabels, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { ingredient })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Classifier request failed: {}", e);
                format!("classifier request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Classifier error: {} - {}", status, error_text);
            return Err(format!("classifier returned {}: {}", status, error_text));
        }

        response.json::<IngredientLabels>().await.map_err(|e| {
            tracing::error!("Failed to parse classifier response: {}", e);
            format!("invalid classifier response: {}", e)
        })
    }

    async fn classify_one(&self, ingredient: String) -> LabeledIngredient {
        match self.predict(&ingredient).await {
            Ok(labels) => LabeledIngredient::labeled(ingredient, labels),
            Err(error) => LabeledIngredient::failed(ingredient, error),
        }
    }
}

impl IngredientClassifier for RemoteIngredientClassifier {
    async fn classify(&self, ingredients: Vec<String>) -> Vec<LabeledIngredient> {
        // buffered keeps the output in input order
        stream::iter(ingredients)
            .map(|ingredient| self.classify_one(ingredient))
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
