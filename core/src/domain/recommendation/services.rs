use crate::domain::{
    ingredient::entities::{HealthImpact, LabeledIngredient},
    recommendation::entities::{
        ImpactCounts, PipelineResult, Recommendation, RecommendationTag, Suitability,
    },
};

pub const MAX_HEALTH_SCORE: u8 = 10;
pub const MAX_TOP_OFFENDERS: usize = 3;

const CHILDREN_UNSAFE_KEYWORDS: [&str; 7] = [
    "emulsifier",
    "preservative",
    "flavour",
    "dextrose",
    "msg",
    "colour",
    "additive",
];

const PREGNANCY_UNSAFE_KEYWORDS: [&str; 4] = ["msg", "sodium nitrite", "nitrate", "additive"];

const MODERATION_REASONS: [&str; 3] = [
    "Includes processed or moderate-risk ingredients.",
    "Can be consumed 1–2 times a week.",
    "Limit usage in children or sensitive individuals.",
];

const HEALTHY_REASONS: [&str; 3] = [
    "Mostly natural and healthy ingredients.",
    "Safe for regular consumption.",
    "Low-risk profile.",
];

impl ImpactCounts {
    pub fn tally(items: &[LabeledIngredient]) -> Self {
        items
            .iter()
            .filter_map(LabeledIngredient::health_impact)
            .fold(Self::default(), |mut counts, impact| {
                match impact {
                    HealthImpact::Good => counts.good += 1,
                    HealthImpact::Moderate => counts.moderate += 1,
                    HealthImpact::Bad => counts.bad += 1,
                }
                counts
            })
    }
}

/// Names of bad-labeled entries in input order.
pub fn harmful_ingredients(items: &[LabeledIngredient]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.health_impact() == Some(HealthImpact::Bad))
        .map(|item| item.name.clone())
        .collect()
}

pub fn generate_recommendation(items: &[LabeledIngredient]) -> Recommendation {
    let counts = ImpactCounts::tally(items);
    let top_offenders: Vec<String> = harmful_ingredients(items)
        .into_iter()
        .take(MAX_TOP_OFFENDERS)
        .collect();

    let (tag, reasons) = if counts.bad >= 2 {
        // bad >= 2 guarantees at least two offenders here
        let reasons = vec![
            format!(
                "Contains multiple harmful ingredients like {}.",
                top_offenders.join(", ")
            ),
            "Not recommended for children.".to_string(),
            "May cause long-term health risks.".to_string(),
            "Avoid frequent consumption.".to_string(),
        ];
        (RecommendationTag::Unhealthy, reasons)
    } else if counts.moderate >= 2 {
        (
            RecommendationTag::ConsumeInModeration,
            MODERATION_REASONS.iter().map(|r| r.to_string()).collect(),
        )
    } else {
        (
            RecommendationTag::Healthy,
            HEALTHY_REASONS.iter().map(|r| r.to_string()).collect(),
        )
    };

    Recommendation {
        tag,
        reasons,
        top_offenders,
    }
}

pub fn get_health_score(items: &[LabeledIngredient]) -> u8 {
    let penalty: usize = items
        .iter()
        .filter_map(LabeledIngredient::health_impact)
        .map(|impact| match impact {
            HealthImpact::Bad => 3,
            HealthImpact::Moderate => 1,
            HealthImpact::Good => 0,
        })
        .sum();

    MAX_HEALTH_SCORE.saturating_sub(penalty.min(MAX_HEALTH_SCORE as usize) as u8)
}

pub fn assess_suitability(items: &[LabeledIngredient]) -> Suitability {
    let all_text = items
        .iter()
        .filter(|item| !item.is_failed())
        .map(|item| item.name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| all_text.contains(k));

    Suitability {
        children: !contains_any(&CHILDREN_UNSAFE_KEYWORDS),
        pregnant: !contains_any(&PREGNANCY_UNSAFE_KEYWORDS),
        daily_use: !items
            .iter()
            .any(|item| item.health_impact() == Some(HealthImpact::Bad)),
    }
}

/// Runs the full pipeline over an already classified list.
pub fn evaluate(items: &[LabeledIngredient]) -> PipelineResult {
    let recommendation = generate_recommendation(items);

    PipelineResult {
        recommendation: recommendation.tag,
        reasons: recommendation.reasons,
        top_offenders: recommendation.top_offenders,
        health_score: get_health_score(items),
        suitability: assess_suitability(items),
    }
}
