use std::sync::Arc;

use recipe_analyzer::config::AnalysisConfig;
use recipe_analyzer::{
    AnalysisMode, AnalysisResult, AnalyzerConfig, AnalyzerError, InMemoryKnowledge,
    RecipeAnalyzer, SuggestionContext, UserPreferences,
};

const RECIPE: &str = "Ingredients:\n2 cups flour\n1 cup sugar\nInstructions:\n1. Mix\n2. Bake at 350°F for 30 minutes";

#[test]
fn test_builder_without_text() {
    let result = RecipeAnalyzer::builder().analysis_type("general").build();

    match result {
        Err(AnalyzerError::BuilderError(msg)) => assert!(msg.contains("No recipe text")),
        other => panic!("expected BuilderError, got {:?}", other),
    }
}

#[test]
fn test_builder_defaults_to_general_report() {
    let result = RecipeAnalyzer::builder().text(RECIPE).build().unwrap();

    let AnalysisResult::Report { recipe, report } = result else {
        panic!("expected a report");
    };
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.temperature.as_deref(), Some("350°F"));
    assert_eq!(report.mode(), AnalysisMode::General);
}

#[test]
fn test_builder_uses_configured_default_mode() {
    let config = AnalyzerConfig {
        analysis: AnalysisConfig {
            default_mode: "nutrition".to_string(),
            ..AnalysisConfig::default()
        },
        ..AnalyzerConfig::default()
    };

    let result = RecipeAnalyzer::builder()
        .text(RECIPE)
        .config(config.clone())
        .build()
        .unwrap();
    let AnalysisResult::Report { report, .. } = result else {
        panic!("expected a report");
    };
    assert_eq!(report.mode(), AnalysisMode::Nutrition);

    // an explicit type wins over the configured default
    let result = RecipeAnalyzer::builder()
        .text(RECIPE)
        .config(config)
        .analysis_type("techniques")
        .build()
        .unwrap();
    let AnalysisResult::Report { report, .. } = result else {
        panic!("expected a report");
    };
    assert_eq!(report.mode(), AnalysisMode::Techniques);
}

#[test]
fn test_builder_parse_only() {
    let result = RecipeAnalyzer::builder()
        .text(RECIPE)
        .analysis_type("nutrition")
        .parse_only()
        .build()
        .unwrap();

    match result {
        AnalysisResult::Recipe(recipe) => {
            assert_eq!(recipe.instructions, vec!["Mix", "Bake at 350°F for 30 minutes"]);
        }
        AnalysisResult::Report { .. } => panic!("expected only the parsed recipe"),
    }
}

#[test]
fn test_builder_with_custom_knowledge() {
    let result = RecipeAnalyzer::builder()
        .text(RECIPE)
        .analysis_type("ingredients")
        .knowledge(Arc::new(InMemoryKnowledge::new()))
        .build()
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["report"]["analysis_type"], "ingredients");
    assert_eq!(json["report"]["substitutions"], serde_json::json!([]));
    assert_eq!(json["recipe"]["cuisine_type"], "general");
}

#[test]
fn test_configured_caps() {
    let config = AnalyzerConfig {
        analysis: AnalysisConfig {
            max_suggestions: 2,
            max_tips: 3,
            ..AnalysisConfig::default()
        },
        ..AnalyzerConfig::default()
    };

    let context = SuggestionContext {
        available_ingredients: vec!["rice".to_string()],
    };
    let suggestions =
        RecipeAnalyzer::suggestions(&config, &context, &UserPreferences::default());
    assert_eq!(
        suggestions,
        vec!["Try a recipe using rice", "Try a quick 30-minute meal"]
    );

    let tips = RecipeAnalyzer::tips(&config, None, &InMemoryKnowledge::basic()).unwrap();
    assert_eq!(tips.len(), 3);
}

#[test]
fn test_result_to_json() {
    let json = RecipeAnalyzer::builder()
        .text(RECIPE)
        .analysis_type("general")
        .build()
        .unwrap()
        .to_json()
        .unwrap();

    assert!(json.contains("\"analysis_type\": \"general\""));
    assert!(json.contains("\"temperature\": \"350°F\""));
}
