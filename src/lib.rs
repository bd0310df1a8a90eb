//! Turn free-form recipe text into a structured, classified recipe and derive
//! ingredient, technique and nutrition insights from it.
//!
//! ```
//! use recipe_analyzer::{analyze, parse, AnalysisReport, InMemoryKnowledge};
//!
//! let recipe = parse("Ingredients:\n2 cups flour\nInstructions:\n1. Mix\n2. Bake 30 minutes");
//! assert_eq!(recipe.cooking_time.as_deref(), Some("30 minutes"));
//!
//! let report = analyze(&recipe, "nutrition", &InMemoryKnowledge::basic()).unwrap();
//! assert!(matches!(report, AnalysisReport::Nutrition(_)));
//! ```

pub mod analysis;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod parser;

// Re-export main types for convenience
pub use analysis::{
    analyze, classify_message, cooking_tips, recipe_suggestions, substitutions, AnalysisMode,
    AnalysisReport, GeneralReport, IngredientReport, MessageType, NutritionReport,
    SuggestionContext, TechniqueReport, UserPreferences,
};
pub use builder::{AnalysisResult, RecipeAnalyzer, RecipeAnalyzerBuilder};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use knowledge::{
    InMemoryKnowledge, IngredientEntry, KnowledgeLookup, NutritionFacts, TechniqueEntry,
};
pub use model::{Difficulty, Ingredient, InstructionStep, Recipe};
pub use parser::{parse, RecipeParser};

use std::fs;
use std::io::{self, Read};

/// Parse recipe text and run one analysis on it
///
/// Convenience wrapper mapping a `recipe_text` / `analysis_type` request onto
/// [`parse`] and [`analyze`].
pub fn analyze_text(
    recipe_text: &str,
    analysis_type: &str,
    knowledge: &dyn KnowledgeLookup,
) -> Result<AnalysisReport, AnalyzerError> {
    let recipe = parse(recipe_text);
    analyze(&recipe, analysis_type, knowledge)
}

/// Read recipe text from a file path, or from stdin when `source` is "-"
pub fn read_recipe(source: &str) -> Result<String, AnalyzerError> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}
