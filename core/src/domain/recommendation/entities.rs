use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Overall verdict for a scanned ingredient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RecommendationTag {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Consume in Moderation")]
    ConsumeInModeration,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
}

impl RecommendationTag {
    pub fn as_str(&self) -> &str {
        match self {
            RecommendationTag::Healthy => "Healthy",
            RecommendationTag::ConsumeInModeration => "Consume in Moderation",
            RecommendationTag::Unhealthy => "Unhealthy",
        }
    }

    /// Label shown to end users, prefixed with its status glyph.
    pub fn display_label(&self) -> String {
        let glyph = match self {
            RecommendationTag::Healthy => "✅",
            RecommendationTag::ConsumeInModeration => "⚠",
            RecommendationTag::Unhealthy => "❌",
        };

        format!("{} {}", glyph, self.as_str())
    }
}

impl TryFrom<&str> for RecommendationTag {
    type Error = CoreError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Healthy" => Ok(RecommendationTag::Healthy),
            "Consume in Moderation" => Ok(RecommendationTag::ConsumeInModeration),
            "Unhealthy" => Ok(RecommendationTag::Unhealthy),
            other => Err(CoreError::Invalid(format!(
                "unknown recommendation '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub tag: RecommendationTag,
    pub reasons: Vec<String>,
    pub top_offenders: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Suitability {
    pub children: bool,
    pub pregnant: bool,
    pub daily_use: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PipelineResult {
    pub recommendation: RecommendationTag,
    pub reasons: Vec<String>,
    pub top_offenders: Vec<String>,
    pub health_score: u8,
    pub suitability: Suitability,
}

/// Per-bucket counts over classified entries. Failed entries and
/// unrecognized labels are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactCounts {
    pub good: usize,
    pub moderate: usize,
    pub bad: usize,
}
