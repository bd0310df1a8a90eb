use regex::Regex;
use std::sync::LazyLock;

/// Body after "Ingredients:" up to the next instructions-like header
static INGREDIENTS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)ingredients?:(.*?)(?:instructions?|directions?|steps?|$)").unwrap()
});

/// Body after "Instructions:" / "Directions:" / "Steps:" up to servings or yield
static INSTRUCTIONS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:instructions?|directions?|steps?):(.*?)(?:servings?|yield|$)").unwrap()
});

static COOKING_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(?:minutes?|mins?|hours?|hrs?)\b").unwrap()
});

static TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+\s*(?:°\s*[fc]\b|degrees?\b)").unwrap());

/// The raw pieces located inside free-form recipe text
///
/// A missing header leaves the corresponding section empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub ingredients: &'a str,
    pub instructions: &'a str,
    /// First duration expression, verbatim
    pub cooking_time: Option<&'a str>,
    /// First temperature expression, verbatim
    pub temperature: Option<&'a str>,
}

/// Locate the ingredients and instructions sections plus time and temperature
///
/// Headers are matched case-insensitively and independently of each other,
/// so either may be absent without affecting the other.
pub fn extract_sections(text: &str) -> Sections<'_> {
    Sections {
        ingredients: section_body(&INGREDIENTS_SECTION, text),
        instructions: section_body(&INSTRUCTIONS_SECTION, text),
        cooking_time: COOKING_TIME.find(text).map(|m| m.as_str()),
        temperature: TEMPERATURE.find(text).map(|m| m.as_str()),
    }
}

fn section_body<'a>(pattern: &Regex, text: &'a str) -> &'a str {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim())
        .unwrap_or_default()
}

/// Leading number of a cooking time expression, converted to minutes when
/// `hours_as_minutes` is set and the unit is hours
pub fn cooking_minutes(cooking_time: &str, hours_as_minutes: bool) -> Option<u64> {
    let caps = COOKING_TIME.captures(cooking_time)?;
    let value: u64 = caps[1].parse().ok()?;

    let lower = caps[0].to_lowercase();
    if hours_as_minutes && (lower.contains("hour") || lower.contains("hr")) {
        Some(value.saturating_mul(60))
    } else {
        Some(value)
    }
}
