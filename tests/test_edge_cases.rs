use recipe_analyzer::{
    analyze, cooking_tips, parse, AnalyzerError, IngredientEntry, KnowledgeLookup,
    RecipeAnalyzer, TechniqueEntry,
};
use std::sync::Arc;

/// Knowledge store whose backend is always down
struct UnavailableKnowledge;

impl KnowledgeLookup for UnavailableKnowledge {
    fn source_name(&self) -> &str {
        "unavailable"
    }

    fn get_ingredient(&self, _name: &str) -> Result<Option<IngredientEntry>, AnalyzerError> {
        Err(AnalyzerError::KnowledgeUnavailable("ingredient table offline".to_string()))
    }

    fn get_technique(&self, _name: &str) -> Result<Option<TechniqueEntry>, AnalyzerError> {
        Err(AnalyzerError::KnowledgeUnavailable("technique table offline".to_string()))
    }

    fn technique_names(&self) -> Result<Vec<String>, AnalyzerError> {
        Err(AnalyzerError::KnowledgeUnavailable("technique table offline".to_string()))
    }

    fn ingredient_names(&self) -> Result<Vec<String>, AnalyzerError> {
        Err(AnalyzerError::KnowledgeUnavailable("ingredient table offline".to_string()))
    }
}

const RECIPE: &str = "Ingredients:\n2 cups flour\nInstructions:\n1. Bake for 20 minutes";

#[test]
fn test_knowledge_failure_propagates() {
    let recipe = parse(RECIPE);

    for mode in ["ingredients", "techniques", "nutrition"] {
        match analyze(&recipe, mode, &UnavailableKnowledge) {
            Err(AnalyzerError::KnowledgeUnavailable(_)) => {}
            other => panic!("{} mode: expected KnowledgeUnavailable, got {:?}", mode, other),
        }
    }
}

#[test]
fn test_general_mode_never_consults_knowledge() {
    let recipe = parse(RECIPE);
    assert!(analyze(&recipe, "general", &UnavailableKnowledge).is_ok());
}

#[test]
fn test_builder_surfaces_knowledge_failure() {
    let result = RecipeAnalyzer::builder()
        .text(RECIPE)
        .analysis_type("nutrition")
        .knowledge(Arc::new(UnavailableKnowledge))
        .build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("ingredient table offline"));
}

#[test]
fn test_empty_sections_skip_knowledge() {
    // nothing to look up, so a broken store is never asked
    let recipe = parse("Just a note about dinner.");
    assert!(analyze(&recipe, "ingredients", &UnavailableKnowledge).is_ok());
    assert!(analyze(&recipe, "techniques", &UnavailableKnowledge).is_ok());
    assert!(analyze(&recipe, "nutrition", &UnavailableKnowledge).is_ok());
}

#[test]
fn test_tips_surface_knowledge_failure() {
    assert!(cooking_tips(None, &UnavailableKnowledge, 10).is_ok());
    assert!(cooking_tips(Some("techniques"), &UnavailableKnowledge, 10).is_err());
}

#[test]
fn test_fractions_fall_back_to_name_only() {
    let recipe = parse("Ingredients:\n1/2 cup sugar\n1 1/2 cups milk\n½ tsp salt");

    for ingredient in &recipe.ingredients {
        assert_eq!(ingredient.amount, None);
        assert_eq!(ingredient.unit, None);
        assert_eq!(ingredient.name, ingredient.original);
    }
    assert_eq!(recipe.ingredients.len(), 3);
}

#[test]
fn test_windows_line_endings_and_blank_lines() {
    let recipe = parse("Ingredients:\r\n2 cups flour\r\n\r\n   \r\n1 egg\r\nInstructions:\r\n1. Mix\r\n\r\n2. Rest");

    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["flour", "egg"]);
    assert_eq!(recipe.instructions, vec!["Mix", "Rest"]);
}

#[test]
fn test_case_insensitive_headers() {
    let recipe = parse("INGREDIENTS:\n3 tomatoes\nSTEPS:\n1. Slice");
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.instructions, vec!["Slice"]);
    assert_eq!(recipe.cuisine_type, "italian");
}
