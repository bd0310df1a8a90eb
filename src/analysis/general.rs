use serde::Serialize;

use crate::model::{Difficulty, Recipe};

const GENERAL_TIPS: [&str; 3] = [
    "Read through all instructions before starting",
    "Prep all ingredients before beginning",
    "Taste as you cook and adjust seasoning",
];

/// Overview of a recipe with rule-based suggestions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralReport {
    pub summary: String,
    pub ingredients_count: usize,
    pub steps_count: usize,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub cuisine_type: String,
    pub dietary_info: Vec<String>,
    pub suggestions: Vec<String>,
    pub tips: Vec<String>,
}

pub(super) fn analyze(recipe: &Recipe) -> GeneralReport {
    let mut suggestions = Vec::new();

    if recipe.ingredients.len() > 15 {
        suggestions.push("Consider breaking this into smaller recipes or meal prep".to_string());
    }
    if recipe.instructions.len() > 10 {
        suggestions
            .push("This recipe has many steps - consider prepping ingredients ahead".to_string());
    }
    if recipe.cooking_time.is_none() {
        suggestions.push("Add cooking time for better meal planning".to_string());
    }

    GeneralReport {
        summary: format!(
            "This is a {} level {} recipe",
            recipe.difficulty, recipe.cuisine_type
        ),
        ingredients_count: recipe.ingredients.len(),
        steps_count: recipe.instructions.len(),
        estimated_time: recipe
            .cooking_time
            .clone()
            .unwrap_or_else(|| "Not specified".to_string()),
        difficulty: recipe.difficulty,
        cuisine_type: recipe.cuisine_type.clone(),
        dietary_info: recipe.dietary_info.clone(),
        suggestions,
        tips: GENERAL_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    #[test]
    fn test_summary_and_counts() {
        let recipe = Recipe {
            ingredients: vec![Ingredient::name_only("basil")],
            instructions: vec!["Tear the basil".to_string()],
            cooking_time: Some("5 minutes".to_string()),
            cuisine_type: "italian".to_string(),
            ..Default::default()
        };

        let report = analyze(&recipe);
        assert_eq!(report.summary, "This is a beginner level italian recipe");
        assert_eq!(report.ingredients_count, 1);
        assert_eq!(report.steps_count, 1);
        assert_eq!(report.estimated_time, "5 minutes");
        assert!(report.suggestions.is_empty());
        assert_eq!(report.tips.len(), 3);
    }

    #[test]
    fn test_rule_based_suggestions() {
        let recipe = Recipe {
            ingredients: (0..16).map(|i| Ingredient::name_only(&i.to_string())).collect(),
            instructions: (0..11).map(|i| format!("step {}", i)).collect(),
            ..Default::default()
        };

        let report = analyze(&recipe);
        assert_eq!(report.estimated_time, "Not specified");
        assert_eq!(
            report.suggestions,
            vec![
                "Consider breaking this into smaller recipes or meal prep",
                "This recipe has many steps - consider prepping ingredients ahead",
                "Add cooking time for better meal planning",
            ]
        );
    }
}
