use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Labels produced by the classifier for a single ingredient.
///
/// Values are owned by the classifier and kept as opaque strings, except
/// `health_impact` which the recommendation pipeline interprets through
/// [`HealthImpact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientLabels {
    pub category: String,
    pub sub_category: String,
    pub is_processed: String,
    pub health_impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ClassificationOutcome {
    Labeled(IngredientLabels),
    Failed { error: String },
}

/// An ingredient together with its classification outcome.
///
/// Serializes flat, e.g. `{"ingredient": "salt", "category": .., "health_impact": "bad"}`
/// or `{"ingredient": "xyz", "error": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabeledIngredient {
    #[serde(rename = "ingredient")]
    pub name: String,
    #[serde(flatten)]
    pub outcome: ClassificationOutcome,
}

impl LabeledIngredient {
    pub fn labeled(name: impl Into<String>, labels: IngredientLabels) -> Self {
        Self {
            name: name.into(),
            outcome: ClassificationOutcome::Labeled(labels),
        }
    }

    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: ClassificationOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn labels(&self) -> Option<&IngredientLabels> {
        match &self.outcome {
            ClassificationOutcome::Labeled(labels) => Some(labels),
            ClassificationOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ClassificationOutcome::Labeled(_) => None,
            ClassificationOutcome::Failed { error } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error().is_some()
    }

    /// Recognized health impact. `None` for failed entries and unknown labels.
    pub fn health_impact(&self) -> Option<HealthImpact> {
        self.labels()
            .and_then(|labels| HealthImpact::from_label(&labels.health_impact))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthImpact {
    Good,
    Moderate,
    Bad,
}

impl HealthImpact {
    /// Case-insensitive exact match; anything else is neutral.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "good" => Some(HealthImpact::Good),
            "moderate" => Some(HealthImpact::Moderate),
            "bad" => Some(HealthImpact::Bad),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HealthImpact::Good => "good",
            HealthImpact::Moderate => "moderate",
            HealthImpact::Bad => "bad",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::ingredient;
    use super::*;
    use serde_json::json;

    #[test]
    fn health_impact_is_matched_case_insensitively() {
        assert_eq!(HealthImpact::from_label("BAD"), Some(HealthImpact::Bad));
        assert_eq!(
            HealthImpact::from_label("Moderate"),
            Some(HealthImpact::Moderate)
        );
        assert_eq!(HealthImpact::from_label("good"), Some(HealthImpact::Good));
    }

    #[test]
    fn unknown_or_padded_labels_are_neutral() {
        assert_eq!(HealthImpact::from_label("unknown"), None);
        assert_eq!(HealthImpact::from_label(" bad"), None);
        assert_eq!(HealthImpact::from_label(""), None);
    }

    #[test]
    fn failed_entry_has_no_health_impact() {
        let entry = LabeledIngredient::failed("e621", "model unavailable");

        assert!(entry.is_failed());
        assert_eq!(entry.error(), Some("model unavailable"));
        assert_eq!(entry.health_impact(), None);
        assert!(entry.labels().is_none());
    }

    #[test]
    fn labeled_entry_serializes_flat() {
        let value = serde_json::to_value(ingredient("salt", "bad")).unwrap();

        assert_eq!(
            value,
            json!({
                "ingredient": "salt",
                "category": "additive",
                "sub_category": "other",
                "is_processed": "yes",
                "health_impact": "bad"
            })
        );
    }

    #[test]
    fn failed_entry_serializes_with_error_field() {
        let value = serde_json::to_value(LabeledIngredient::failed("xyz", "boom")).unwrap();

        assert_eq!(value, json!({ "ingredient": "xyz", "error": "boom" }));
    }

    #[test]
    fn stored_rows_deserialize_into_both_variants() {
        let rows: Vec<LabeledIngredient> = serde_json::from_value(json!([
            {
                "ingredient": "Sugar",
                "category": "sweetener",
                "sub_category": "natural",
                "is_processed": "no",
                "health_impact": "Good"
            },
            { "ingredient": "???", "error": "could not classify" }
        ]))
        .unwrap();

        assert_eq!(rows[0].name, "Sugar");
        assert_eq!(rows[0].health_impact(), Some(HealthImpact::Good));
        assert_eq!(rows[1].error(), Some("could not classify"));
    }
}
