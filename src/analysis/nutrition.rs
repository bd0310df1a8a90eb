use serde::Serialize;

use crate::error::AnalyzerError;
use crate::knowledge::{KnowledgeLookup, NutritionFacts};
use crate::model::Recipe;

/// What a single ingredient added to the totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionContribution {
    pub name: String,
    /// The ingredient amount, or 1 when the line had none or it was not positive
    pub multiplier: f64,
    pub nutrition: NutritionFacts,
}

/// Approximate nutrition totals for the whole recipe
///
/// Figures are per-unit values multiplied by the parsed amount, summed over
/// ingredients. No unit conversion or per-serving normalization is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionReport {
    pub estimated_nutrition: NutritionFacts,
    pub ingredient_breakdown: Vec<NutritionContribution>,
}

pub(super) fn analyze(
    recipe: &Recipe,
    knowledge: &dyn KnowledgeLookup,
) -> Result<NutritionReport, AnalyzerError> {
    let mut totals = NutritionFacts::default();
    let mut breakdown = Vec::new();

    for ingredient in &recipe.ingredients {
        let Some(per_unit) = knowledge
            .get_ingredient(&ingredient.name.to_lowercase())?
            .and_then(|entry| entry.nutrition)
        else {
            continue;
        };

        let multiplier = ingredient.amount.filter(|a| *a > 0.0).unwrap_or(1.0);
        let contribution = per_unit.scaled(multiplier);
        totals.add(&contribution);

        breakdown.push(NutritionContribution {
            name: ingredient.name.clone(),
            multiplier,
            nutrition: contribution,
        });
    }

    Ok(NutritionReport {
        estimated_nutrition: totals,
        ingredient_breakdown: breakdown,
    })
}
