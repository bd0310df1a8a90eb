use log::debug;

use crate::classifier::Classifier;
use crate::config::ClassifierConfig;
use crate::model::Recipe;

mod ingredients;
mod instructions;
mod quantity;
mod sections;

pub use self::ingredients::parse_ingredients;
pub use self::instructions::parse_instructions;
pub use self::quantity::tokenize;
pub use self::sections::{cooking_minutes, extract_sections, Sections};

/// Turns free-form recipe text into a classified [`Recipe`]
///
/// The parser holds no state between calls; one instance can be shared
/// across threads and reused for any number of recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeParser {
    classifier: Classifier,
}

impl RecipeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ClassifierConfig) -> Self {
        RecipeParser {
            classifier: Classifier::new(config.clone()),
        }
    }

    /// Parse recipe text and fill in the classification fields
    ///
    /// This pipeline:
    /// 1. Locates the ingredients and instructions sections
    /// 2. Parses each section line by line
    /// 3. Records the first cooking time and temperature found anywhere
    /// 4. Classifies difficulty, cuisine and dietary tags
    pub fn parse(&self, text: &str) -> Recipe {
        let sections = extract_sections(text);

        let mut recipe = Recipe {
            ingredients: parse_ingredients(sections.ingredients),
            instructions: parse_instructions(sections.instructions),
            cooking_time: sections.cooking_time.map(str::to_string),
            temperature: sections.temperature.map(str::to_string),
            ..Default::default()
        };

        debug!(
            "Parsed {} ingredients and {} instructions (cooking time: {:?})",
            recipe.ingredients.len(),
            recipe.instructions.len(),
            recipe.cooking_time
        );

        self.classifier.classify(&mut recipe, text);
        recipe
    }
}

/// Parse recipe text with the default configuration
pub fn parse(text: &str) -> Recipe {
    RecipeParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn test_parse_end_to_end() {
        let recipe = parse(
            "Ingredients:\n2 cups flour\n1 cup sugar\nInstructions:\n1. Mix\n2. Bake at 350°F for 30 minutes",
        );

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].unit.as_deref(), Some("cup"));
        assert_eq!(recipe.instructions, vec!["Mix", "Bake at 350°F for 30 minutes"]);
        assert_eq!(recipe.cooking_time.as_deref(), Some("30 minutes"));
        assert_eq!(recipe.temperature.as_deref(), Some("350°F"));
        assert_eq!(recipe.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_parse_empty_text() {
        let recipe = parse("");
        assert_eq!(recipe, Recipe::default());
    }

    #[test]
    fn test_config_changes_hour_scoring() {
        let text = "Ingredients:\n1 brisket\nInstructions:\nSmoke for 3 hours";

        let default = parse(text);
        assert_eq!(default.difficulty, Difficulty::Beginner);

        let config = ClassifierConfig {
            hours_as_minutes: true,
        };
        let converted = RecipeParser::with_config(&config).parse(text);
        assert_eq!(converted.difficulty, Difficulty::Intermediate);
    }
}
