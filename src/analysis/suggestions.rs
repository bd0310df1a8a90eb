use serde::Deserialize;

use crate::error::AnalyzerError;
use crate::knowledge::KnowledgeLookup;

const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Try a quick 30-minute meal",
    "Explore seasonal ingredients",
    "Consider meal prep for the week",
];

const GENERAL_COOKING_TIPS: [&str; 8] = [
    "Always read through the entire recipe before starting",
    "Prep all ingredients before beginning to cook",
    "Taste as you cook and adjust seasoning",
    "Keep your workspace clean and organized",
    "Use the right tools for the job",
    "Don't be afraid to experiment with flavors",
    "Practice food safety at all times",
    "Learn from your mistakes and keep trying",
];

/// What the cook currently has at hand
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionContext {
    #[serde(default)]
    pub available_ingredients: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

/// Recipe ideas from the cook's pantry and dietary restrictions
///
/// Personalized ideas come first, followed by a fixed set of generic ones.
pub fn recipe_suggestions(
    context: &SuggestionContext,
    preferences: &UserPreferences,
    limit: usize,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !context.available_ingredients.is_empty() {
        let pantry: Vec<&str> = context
            .available_ingredients
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("Try a recipe using {}", pantry.join(", ")));
    }

    if let Some(restriction) = preferences.dietary_restrictions.first() {
        suggestions.push(format!("Explore {} recipes", restriction));
    }

    suggestions.extend(GENERIC_SUGGESTIONS.iter().map(|s| s.to_string()));
    suggestions.truncate(limit);
    suggestions
}

/// Cooking tips, either general or drawn from one knowledge category
///
/// Categories are "techniques" and "ingredients"; any other category has no
/// tips.
pub fn cooking_tips(
    category: Option<&str>,
    knowledge: &dyn KnowledgeLookup,
    limit: usize,
) -> Result<Vec<String>, AnalyzerError> {
    let mut tips = match category.map(|c| c.trim().to_lowercase()) {
        None => GENERAL_COOKING_TIPS.iter().map(|t| t.to_string()).collect(),
        Some(category) if category == "techniques" => {
            let mut tips = Vec::new();
            for name in knowledge.technique_names()? {
                if let Some(entry) = knowledge.get_technique(&name)? {
                    tips.extend(entry.tips);
                }
            }
            tips
        }
        Some(category) if category == "ingredients" => {
            let mut tips = Vec::new();
            for name in knowledge.ingredient_names()? {
                if let Some(entry) = knowledge.get_ingredient(&name)? {
                    tips.extend(entry.cooking_tips);
                }
            }
            tips
        }
        Some(_) => Vec::new(),
    };

    tips.truncate(limit);
    Ok(tips)
}
