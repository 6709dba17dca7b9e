use std::sync::LazyLock;

use regex::Regex;

static INGREDIENTS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(INGREDIENTS|Ingredients|ingredients)[:\-]?\s*(.*)").expect("valid regex")
});
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\(\)\[\]\{\}]").expect("valid regex"));
static PERCENTAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(\.\d+)?%").expect("valid regex"));
static NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,3}(\.[0-9]+)?").expect("valid regex"));
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",|;").expect("valid regex"));

const STOP_KEYWORDS: [&str; 5] = ["CONTAINS", "Contains", "NUTRITION", "Nutrition", "Manufactured"];

/// Turns raw OCR segments of a food label into ingredient tokens.
///
/// Keeps only the text after an "ingredients" marker (when present), cuts at
/// the first allergen/nutrition/manufacturer section, strips brackets,
/// percentages and numbers, then splits on `,` and `;`.
pub fn parse_ingredient_list(segments: &[String]) -> Vec<String> {
    let full_text = segments.join(" ");

    let mut text = INGREDIENTS_MARKER
        .captures(&full_text)
        .and_then(|captures| captures.get(2))
        .map(|m| m.as_str())
        .unwrap_or(&full_text)
        .to_string();

    for keyword in STOP_KEYWORDS {
        if let Some(index) = text.find(keyword) {
            text.truncate(index);
        }
    }

    let text = BRACKETS.replace_all(&text, "");
    let text = PERCENTAGES.replace_all(&text, "");
    let text = NUMBERS.replace_all(&text, "");

    SEPARATORS
        .split(&text)
        .map(|token| token.trim().to_lowercase())
        .filter(|token| token.chars().count() > 1)
        .collect()
}
