//! Difficulty, cuisine and dietary classification
//!
//! Every rule here is a fixed, ordered table. Ties are broken by table order,
//! never by how many keywords matched.

use crate::config::ClassifierConfig;
use crate::model::{Difficulty, Recipe, GENERAL_CUISINE};
use crate::parser::cooking_minutes;

/// Cuisines in priority order; the first with any keyword present wins
pub const CUISINE_KEYWORDS: &[(&str, &[&str])] = &[
    ("italian", &["pasta", "basil", "oregano", "parmesan", "olive oil", "tomato"]),
    ("french", &["butter", "wine", "shallots", "herbs de provence", "dijon"]),
    ("chinese", &["soy sauce", "ginger", "sesame oil", "rice wine", "five spice"]),
    ("japanese", &["miso", "dashi", "mirin", "sake", "wasabi", "nori"]),
    ("indian", &["curry", "cumin", "turmeric", "cardamom", "garam masala"]),
    ("mexican", &["chili", "lime", "cilantro", "tortilla", "queso", "salsa"]),
];

/// Dietary tags in output order; every tag with a synonym present is reported
pub const DIETARY_KEYWORDS: &[(&str, &[&str])] = &[
    ("vegetarian", &["vegetarian", "veggie", "no meat"]),
    ("vegan", &["vegan", "plant-based", "no dairy"]),
    ("gluten-free", &["gluten-free", "gluten free", "gf"]),
    ("dairy-free", &["dairy-free", "dairy free", "lactose-free"]),
    ("low-carb", &["low-carb", "low carb", "keto"]),
    ("healthy", &["healthy", "light", "low-fat"]),
];

/// Fills the classification fields of a parsed recipe
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Classifier { config }
    }

    /// Set difficulty, cuisine and dietary tags from the recipe and its raw text
    pub fn classify(&self, recipe: &mut Recipe, text: &str) {
        let lower = text.to_lowercase();
        recipe.difficulty = self.difficulty(recipe);
        recipe.cuisine_type = cuisine_type(&lower).to_string();
        recipe.dietary_info = dietary_tags(&lower)
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    /// Additive complexity score over ingredient count, step count and time
    pub fn difficulty_score(&self, recipe: &Recipe) -> u32 {
        let mut score = 0;

        score += match recipe.ingredients.len() {
            n if n > 15 => 2,
            n if n > 10 => 1,
            _ => 0,
        };

        score += match recipe.instructions.len() {
            n if n > 10 => 2,
            n if n > 5 => 1,
            _ => 0,
        };

        let minutes = recipe
            .cooking_time
            .as_deref()
            .and_then(|time| cooking_minutes(time, self.config.hours_as_minutes));
        if minutes.is_some_and(|m| m > 60) {
            score += 1;
        }

        score
    }

    pub fn difficulty(&self, recipe: &Recipe) -> Difficulty {
        Difficulty::from_score(self.difficulty_score(recipe))
    }
}

/// First cuisine in table order with a keyword contained in the text
///
/// `text_lower` must already be lowercased.
pub fn cuisine_type(text_lower: &str) -> &'static str {
    CUISINE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(cuisine, _)| *cuisine)
        .unwrap_or(GENERAL_CUISINE)
}

/// All dietary tags with a synonym contained in the text, in table order
///
/// `text_lower` must already be lowercased.
pub fn dietary_tags(text_lower: &str) -> Vec<&'static str> {
    DIETARY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(tag, _)| *tag)
        .collect()
}
