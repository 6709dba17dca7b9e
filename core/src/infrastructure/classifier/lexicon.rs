use std::collections::HashMap;

use anyhow::Context;

use crate::domain::ingredient::{
    entities::{IngredientLabels, LabeledIngredient},
    ports::IngredientClassifier,
};

/// Offline classifier backed by a JSON object of `name -> labels`.
#[derive(Debug, Clone, Default)]
pub struct LexiconIngredientClassifier {
    entries: HashMap<String, IngredientLabels>,
}

impl LexiconIngredientClassifier {
    pub fn from_path(path: &str) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read classifier lexicon at {}", path))?;

        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, anyhow::Error> {
        let entries: HashMap<String, IngredientLabels> =
            serde_json::from_str(raw).context("classifier lexicon is not valid JSON")?;

        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(name, labels)| (name.trim().to_lowercase(), labels))
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn classify_one(&self, ingredient: String) -> LabeledIngredient {
        match self.entries.get(&ingredient.trim().to_lowercase()) {
            Some(labels) => LabeledIngredient::labeled(ingredient, labels.clone()),
            None => {
                let error = format!("no classification available for '{}'", ingredient);
                LabeledIngredient::failed(ingredient, error)
            }
        }
    }
}

impl IngredientClassifier for LexiconIngredientClassifier {
    async fn classify(&self, ingredients: Vec<String>) -> Vec<LabeledIngredient> {
        ingredients
            .into_iter()
            .map(|ingredient| self.classify_one(ingredient))
            .collect()
    }
}
