use serde::Serialize;

use crate::error::AnalyzerError;
use crate::knowledge::{IngredientEntry, KnowledgeLookup};
use crate::model::Recipe;

/// One recipe ingredient together with whatever the knowledge store knows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDetail {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    /// Empty entry when the store has no record
    pub info: IngredientEntry,
    pub substitutes: Vec<String>,
}

/// Substitutions, storage advice and a shopping list for a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientReport {
    pub ingredients: Vec<IngredientDetail>,
    pub substitutions: Vec<String>,
    pub shopping_list: Vec<String>,
    pub storage_tips: Vec<String>,
}

pub(super) fn analyze(
    recipe: &Recipe,
    knowledge: &dyn KnowledgeLookup,
) -> Result<IngredientReport, AnalyzerError> {
    let mut report = IngredientReport {
        ingredients: Vec::with_capacity(recipe.ingredients.len()),
        substitutions: Vec::new(),
        shopping_list: Vec::with_capacity(recipe.ingredients.len()),
        storage_tips: Vec::new(),
    };

    for ingredient in &recipe.ingredients {
        let info = knowledge
            .get_ingredient(&ingredient.name.to_lowercase())?
            .unwrap_or_default();

        report.substitutions.extend(info.substitutes.iter().cloned());
        report.storage_tips.extend(info.storage_tips.iter().cloned());
        report.shopping_list.push(ingredient.original.clone());

        report.ingredients.push(IngredientDetail {
            name: ingredient.name.clone(),
            amount: ingredient.amount,
            unit: ingredient.unit.clone(),
            substitutes: info.substitutes.clone(),
            info,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::InMemoryKnowledge;
    use crate::parser::parse;

    #[test]
    fn test_substitutes_and_shopping_list() {
        let recipe = parse("Ingredients:\n2 cups Flour\n1 pinch saffron");
        let report = analyze(&recipe, &InMemoryKnowledge::basic()).unwrap();

        assert_eq!(report.shopping_list, vec!["2 cups Flour", "1 pinch saffron"]);
        assert_eq!(
            report.substitutions,
            vec!["almond flour", "coconut flour", "oat flour"]
        );
        assert_eq!(report.storage_tips.len(), 2);

        assert_eq!(report.ingredients[0].info.name, "flour");
        assert_eq!(report.ingredients[1].info, IngredientEntry::default());
        assert!(report.ingredients[1].substitutes.is_empty());
    }
}
