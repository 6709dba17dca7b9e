pub mod lexicon;
pub mod remote;

use std::time::Duration;

use crate::domain::{
    common::ClassifierConfig,
    ingredient::{entities::LabeledIngredient, ports::IngredientClassifier},
};

pub use lexicon::LexiconIngredientClassifier;
pub use remote::RemoteIngredientClassifier;

/// Classifier selected from configuration at startup.
pub enum ConfiguredClassifier {
    Remote(RemoteIngredientClassifier),
    Lexicon(LexiconIngredientClassifier),
}

impl ConfiguredClassifier {
    /// Uses the model server when an endpoint is configured, the lexicon file otherwise.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, anyhow::Error> {
        match &config.endpoint {
            Some(endpoint) => {
                tracing::info!(endpoint = %endpoint, "using remote ingredient classifier");
                Ok(Self::Remote(RemoteIngredientClassifier::new(
                    endpoint.clone(),
                    config.concurrency,
                    Duration::from_secs(config.timeout_secs),
                )?))
            }
            None => {
                tracing::info!(path = %config.lexicon_path, "using lexicon ingredient classifier");
                Ok(Self::Lexicon(LexiconIngredientClassifier::from_path(
                    &config.lexicon_path,
                )?))
            }
        }
    }
}

impl IngredientClassifier for ConfiguredClassifier {
    async fn classify(&self, ingredients: Vec<String>) -> Vec<LabeledIngredient> {
        match self {
            Self::Remote(classifier) => classifier.classify(ingredients).await,
            Self::Lexicon(classifier) => classifier.classify(ingredients).await,
        }
    }
}
