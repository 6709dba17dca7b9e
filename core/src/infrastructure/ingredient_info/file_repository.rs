use std::collections::HashMap;

use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient_info::ports::IngredientInfoRepository,
};

/// Ingredient descriptions loaded once from a JSON object of `name -> description`.
#[derive(Debug, Clone, Default)]
pub struct FileIngredientInfoRepository {
    descriptions: HashMap<String, String>,
}

impl FileIngredientInfoRepository {
    /// A missing or unreadable file leaves the table empty, so every lookup
    /// falls back to the default description.
    pub fn load(path: &str) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path, "Ingredient info file unavailable: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(descriptions) => Self::from_map(descriptions),
            Err(e) => {
                warn!(path = %path, "Ingredient info file is not valid JSON: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_map(descriptions: HashMap<String, String>) -> Self {
        Self {
            descriptions: descriptions
                .into_iter()
                .map(|(name, description)| (name.trim().to_lowercase(), description))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

impl IngredientInfoRepository for FileIngredientInfoRepository {
    async fn describe(&self, ingredient: &str) -> Result<Option<String>, CoreError> {
        Ok(self
            .descriptions
            .get(&ingredient.trim().to_lowercase())
            .cloned())
    }
}
