mod chat;
mod general;
mod ingredients;
mod nutrition;
mod suggestions;
mod techniques;

pub use chat::{
    classify_message, common_substitutions, substitutions, MessageType, MESSAGE_PATTERNS,
    SUBSTITUTION_KEYWORDS,
};
pub use general::GeneralReport;
pub use ingredients::{IngredientDetail, IngredientReport};
pub use nutrition::{NutritionContribution, NutritionReport};
pub use suggestions::{cooking_tips, recipe_suggestions, SuggestionContext, UserPreferences};
pub use techniques::{TechniqueDetail, TechniqueReport};

use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;

use crate::error::AnalyzerError;
use crate::knowledge::KnowledgeLookup;
use crate::model::Recipe;

/// Shape of report requested from [`analyze`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnalysisMode {
    #[default]
    General,
    Ingredients,
    Techniques,
    Nutrition,
}

impl AnalysisMode {
    /// Parse a mode name case-insensitively; anything unknown is `General`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "general" => AnalysisMode::General,
            "ingredients" => AnalysisMode::Ingredients,
            "techniques" => AnalysisMode::Techniques,
            "nutrition" => AnalysisMode::Nutrition,
            other => {
                debug!("Unknown analysis mode '{}', using general", other);
                AnalysisMode::General
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::General => "general",
            AnalysisMode::Ingredients => "ingredients",
            AnalysisMode::Techniques => "techniques",
            AnalysisMode::Nutrition => "nutrition",
        }
    }
}

impl From<&str> for AnalysisMode {
    fn from(name: &str) -> Self {
        AnalysisMode::from_name(name)
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a recipe analysis, one variant per mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "analysis_type", rename_all = "lowercase")]
pub enum AnalysisReport {
    General(GeneralReport),
    Ingredients(IngredientReport),
    Techniques(TechniqueReport),
    Nutrition(NutritionReport),
}

impl AnalysisReport {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            AnalysisReport::General(_) => AnalysisMode::General,
            AnalysisReport::Ingredients(_) => AnalysisMode::Ingredients,
            AnalysisReport::Techniques(_) => AnalysisMode::Techniques,
            AnalysisReport::Nutrition(_) => AnalysisMode::Nutrition,
        }
    }
}

/// Produce the requested report for a classified recipe
///
/// Knowledge misses contribute nothing. The only error is a failure of the
/// knowledge collaborator itself, which is returned unchanged.
pub fn analyze(
    recipe: &Recipe,
    mode: impl Into<AnalysisMode>,
    knowledge: &dyn KnowledgeLookup,
) -> Result<AnalysisReport, AnalyzerError> {
    let mode = mode.into();

    let report = match mode {
        AnalysisMode::General => Ok(AnalysisReport::General(general::analyze(recipe))),
        AnalysisMode::Ingredients => {
            ingredients::analyze(recipe, knowledge).map(AnalysisReport::Ingredients)
        }
        AnalysisMode::Techniques => {
            techniques::analyze(recipe, knowledge).map(AnalysisReport::Techniques)
        }
        AnalysisMode::Nutrition => {
            nutrition::analyze(recipe, knowledge).map(AnalysisReport::Nutrition)
        }
    };

    match &report {
        Ok(_) => info!(
            "Completed {} analysis using {} knowledge",
            mode,
            knowledge.source_name()
        ),
        Err(e) => warn!(
            "{} analysis failed on {} knowledge: {}",
            mode,
            knowledge.source_name(),
            e
        ),
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::InMemoryKnowledge;
    use crate::parser::parse;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(AnalysisMode::from("general"), AnalysisMode::General);
        assert_eq!(AnalysisMode::from("Ingredients"), AnalysisMode::Ingredients);
        assert_eq!(AnalysisMode::from(" TECHNIQUES "), AnalysisMode::Techniques);
        assert_eq!(AnalysisMode::from("nutrition"), AnalysisMode::Nutrition);
        assert_eq!(AnalysisMode::from("flavor"), AnalysisMode::General);
        assert_eq!(AnalysisMode::from(""), AnalysisMode::General);
    }

    #[test]
    fn test_unknown_mode_yields_general_report() {
        let recipe = parse("Ingredients:\n2 cups flour");
        let report = analyze(&recipe, "wine-pairing", &InMemoryKnowledge::basic()).unwrap();
        assert_eq!(report.mode(), AnalysisMode::General);
    }

    #[test]
    fn test_report_is_tagged_by_mode() {
        let recipe = parse("Ingredients:\n2 cups flour");
        let report = analyze(&recipe, AnalysisMode::Nutrition, &InMemoryKnowledge::basic()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["analysis_type"], "nutrition");
        assert_eq!(json["estimated_nutrition"]["calories"], 728.0);
    }
}
