mod memory;

pub use memory::InMemoryKnowledge;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// Reference data for one ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub storage_tips: Vec<String>,
    #[serde(default)]
    pub cooking_tips: Vec<String>,
    /// Per-unit nutrition figures, when known
    #[serde(default)]
    pub nutrition: Option<NutritionFacts>,
}

/// Reference data for one cooking technique
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechniqueEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
}

/// Nutrient figures; anything not listed counts as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutritionFacts {
    /// Every nutrient multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        NutritionFacts {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
        }
    }

    pub fn add(&mut self, other: &NutritionFacts) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
    }
}

/// Read-only source of ingredient and technique reference data
///
/// Names passed in are already lowercased. A missing entry is `Ok(None)`;
/// `Err` is reserved for the store itself being unavailable, and is passed
/// straight back to the caller of the analysis.
pub trait KnowledgeLookup: Send + Sync {
    /// Get the knowledge source name (e.g., "in-memory")
    fn source_name(&self) -> &str;

    fn get_ingredient(&self, name: &str) -> Result<Option<IngredientEntry>, AnalyzerError>;

    fn get_technique(&self, name: &str) -> Result<Option<TechniqueEntry>, AnalyzerError>;

    /// Every technique name known to the store, in a stable order
    fn technique_names(&self) -> Result<Vec<String>, AnalyzerError>;

    /// Every ingredient name known to the store, in a stable order
    fn ingredient_names(&self) -> Result<Vec<String>, AnalyzerError>;
}
