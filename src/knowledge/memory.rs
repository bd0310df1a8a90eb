use serde::Deserialize;
use std::collections::BTreeMap;

use super::{IngredientEntry, KnowledgeLookup, NutritionFacts, TechniqueEntry};
use crate::error::AnalyzerError;

/// Knowledge held in ordered maps keyed by lowercase name
///
/// Iteration order is alphabetical, which keeps technique scans
/// deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InMemoryKnowledge {
    #[serde(default)]
    ingredients: BTreeMap<String, IngredientEntry>,
    #[serde(default)]
    techniques: BTreeMap<String, TechniqueEntry>,
}

impl InMemoryKnowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient, keyed by its lowercased name
    pub fn with_ingredient(mut self, entry: IngredientEntry) -> Self {
        self.ingredients.insert(entry.name.to_lowercase(), entry);
        self
    }

    /// Add a technique, keyed by its lowercased name
    pub fn with_technique(mut self, entry: TechniqueEntry) -> Self {
        self.techniques.insert(entry.name.to_lowercase(), entry);
        self
    }

    pub fn len(&self) -> usize {
        self.ingredients.len() + self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.techniques.is_empty()
    }

    /// A small built-in table: flour, eggs and butter; sautéing and baking
    pub fn basic() -> Self {
        Self::new()
            .with_ingredient(ingredient(
                "flour",
                "grains",
                "A powder made from ground grains, used as the base for many baked goods and sauces",
                &["almond flour", "coconut flour", "oat flour"],
                &["Store in a cool, dry place", "Use within 6-12 months"],
                &["Measure accurately", "Sift before using", "Don't overmix"],
                (364.0, 10.0, 76.0, 1.0),
            ))
            .with_ingredient(ingredient(
                "eggs",
                "dairy_eggs",
                "A versatile ingredient used for binding, leavening, and adding richness to dishes",
                &["flax eggs", "chia eggs", "banana"],
                &["Store in refrigerator", "Use within 3-5 weeks"],
                &["Bring to room temperature", "Check for freshness", "Don't overcook"],
                (155.0, 13.0, 1.0, 11.0),
            ))
            .with_ingredient(ingredient(
                "butter",
                "dairy_eggs",
                "A dairy product made from churned cream, used for cooking, baking, and flavoring",
                &["olive oil", "coconut oil", "applesauce"],
                &["Store in refrigerator", "Use within 1-3 months"],
                &["Use unsalted for baking", "Bring to room temperature", "Don't burn"],
                (717.0, 1.0, 0.0, 81.0),
            ))
            .with_technique(TechniqueEntry {
                name: "sautéing".to_string(),
                description: "Quick cooking over high heat with minimal oil".to_string(),
                steps: strings(&[
                    "Heat oil in a pan over medium-high heat",
                    "Add ingredients in small batches",
                    "Stir frequently to prevent burning",
                    "Cook until desired doneness",
                ]),
                tips: strings(&[
                    "Don't overcrowd the pan",
                    "Use high smoke point oils",
                    "Keep ingredients moving",
                ]),
                equipment: strings(&["frying pan", "spatula", "oil"]),
                common_mistakes: strings(&["overcrowding", "low heat", "not stirring"]),
            })
            .with_technique(TechniqueEntry {
                name: "baking".to_string(),
                description: "Cooking with dry heat in an enclosed space".to_string(),
                steps: strings(&[
                    "Preheat oven to specified temperature",
                    "Prepare ingredients and pan",
                    "Place in oven and bake for specified time",
                    "Check for doneness",
                ]),
                tips: strings(&[
                    "Always preheat the oven",
                    "Use the correct pan size",
                    "Don't open the oven too often",
                ]),
                equipment: strings(&["oven", "baking pan", "thermometer"]),
                common_mistakes: strings(&["not preheating", "wrong temperature", "overbaking"]),
            })
    }
}

impl KnowledgeLookup for InMemoryKnowledge {
    fn source_name(&self) -> &str {
        "in-memory"
    }

    fn get_ingredient(&self, name: &str) -> Result<Option<IngredientEntry>, AnalyzerError> {
        Ok(self.ingredients.get(name).cloned())
    }

    fn get_technique(&self, name: &str) -> Result<Option<TechniqueEntry>, AnalyzerError> {
        Ok(self.techniques.get(name).cloned())
    }

    fn technique_names(&self) -> Result<Vec<String>, AnalyzerError> {
        Ok(self.techniques.keys().cloned().collect())
    }

    fn ingredient_names(&self) -> Result<Vec<String>, AnalyzerError> {
        Ok(self.ingredients.keys().cloned().collect())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ingredient(
    name: &str,
    category: &str,
    description: &str,
    substitutes: &[&str],
    storage_tips: &[&str],
    cooking_tips: &[&str],
    (calories, protein, carbs, fat): (f64, f64, f64, f64),
) -> IngredientEntry {
    IngredientEntry {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        substitutes: strings(substitutes),
        storage_tips: strings(storage_tips),
        cooking_tips: strings(cooking_tips),
        nutrition: Some(NutritionFacts {
            calories,
            protein,
            carbs,
            fat,
            fiber: 0.0,
        }),
    }
}
