//! Keyword routing for free-form cooking questions
//!
//! Both tables are scanned in order and the first hit wins, the same way
//! cuisine detection works.

use log::debug;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::AnalyzerError;
use crate::knowledge::KnowledgeLookup;

/// Kind of cooking question a chat message asks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    RecipeQuestion,
    TechniqueQuestion,
    IngredientQuestion,
    SafetyQuestion,
    GeneralCooking,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::RecipeQuestion => "recipe_question",
            MessageType::TechniqueQuestion => "technique_question",
            MessageType::IngredientQuestion => "ingredient_question",
            MessageType::SafetyQuestion => "safety_question",
            MessageType::GeneralCooking => "general_cooking",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question patterns in priority order, matched against the lowercased message
pub const MESSAGE_PATTERNS: &[(MessageType, &[&str])] = &[
    (
        MessageType::RecipeQuestion,
        &[
            r"how.*cook.*",
            r"recipe.*for.*",
            r"how.*make.*",
            r"what.*ingredients.*",
            r"substitute.*for.*",
        ],
    ),
    (
        MessageType::TechniqueQuestion,
        &[
            r"how.*(sauté|bake|grill|fry|boil|steam|roast)",
            r"what.*temperature.*",
            r"how.*long.*cook.*",
            r"technique.*for.*",
        ],
    ),
    (
        MessageType::IngredientQuestion,
        &[
            r"what.*is.*",
            r"substitute.*",
            r"alternative.*to.*",
            r"where.*buy.*",
            r"how.*store.*",
        ],
    ),
    (
        MessageType::SafetyQuestion,
        &[
            r"safe.*to.*eat.*",
            r"food.*poisoning.*",
            r"expired.*",
            r"temperature.*danger.*",
        ],
    ),
];

/// Fallback substitutes by ingredient keyword, first match wins
pub const SUBSTITUTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("butter", &["olive oil", "coconut oil", "applesauce", "avocado"]),
    ("eggs", &["flax eggs", "chia eggs", "banana", "applesauce"]),
    ("milk", &["almond milk", "soy milk", "oat milk", "coconut milk"]),
    ("flour", &["almond flour", "coconut flour", "oat flour", "rice flour"]),
    ("sugar", &["honey", "maple syrup", "stevia", "agave nectar"]),
];

const NO_KNOWN_SUBSTITUTES: [&str; 3] = [
    "Check with a cooking expert",
    "Research online",
    "Try similar ingredients",
];

/// One alternation per message type, compiled from `MESSAGE_PATTERNS`
static MESSAGE_MATCHERS: LazyLock<Vec<(MessageType, Regex)>> = LazyLock::new(|| {
    MESSAGE_PATTERNS
        .iter()
        .map(|(kind, patterns)| (*kind, Regex::new(&patterns.join("|")).unwrap()))
        .collect()
});

/// Route a chat message to the first question type whose patterns match
pub fn classify_message(message: &str) -> MessageType {
    let lower = message.to_lowercase();

    let kind = MESSAGE_MATCHERS
        .iter()
        .find(|(_, matcher)| matcher.is_match(&lower))
        .map(|(kind, _)| *kind)
        .unwrap_or(MessageType::GeneralCooking);

    debug!("Classified message as {}", kind);
    kind
}

/// Keyword-based substitutes for an ingredient the knowledge store lacks
pub fn common_substitutions(ingredient: &str) -> Vec<String> {
    let lower = ingredient.to_lowercase();

    SUBSTITUTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, substitutes)| *substitutes)
        .unwrap_or(&NO_KNOWN_SUBSTITUTES)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Substitutes from the knowledge store, falling back to the keyword table
pub fn substitutions(
    ingredient: &str,
    knowledge: &dyn KnowledgeLookup,
) -> Result<Vec<String>, AnalyzerError> {
    let known = knowledge
        .get_ingredient(&ingredient.trim().to_lowercase())?
        .map(|entry| entry.substitutes)
        .unwrap_or_default();

    if known.is_empty() {
        Ok(common_substitutions(ingredient))
    } else {
        Ok(known)
    }
}
