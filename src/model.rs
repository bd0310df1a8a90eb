use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line of the ingredients section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Leading numeric quantity, when the line starts with a positive one
    pub amount: Option<f64>,
    /// Lowercased word following the amount
    pub unit: Option<String>,
    /// Ingredient name; never empty
    pub name: String,
    /// The trimmed source line
    pub original: String,
}

impl Ingredient {
    /// An ingredient with no recognizable quantity structure
    pub fn name_only(line: &str) -> Self {
        Ingredient {
            amount: None,
            unit: None,
            name: line.to_string(),
            original: line.to_string(),
        }
    }
}

/// One cleaned instruction with its ordinal marker removed
pub type InstructionStep = String;

/// Difficulty label derived from the additive complexity score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Map a complexity score to its label
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 4 => Difficulty::Expert,
            s if s >= 2 => Difficulty::Advanced,
            1 => Difficulty::Intermediate,
            _ => Difficulty::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cuisine label used when no cuisine keyword is present
pub const GENERAL_CUISINE: &str = "general";

/// A recipe parsed from free-form text and enriched by the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    /// First duration expression found in the text, e.g. "30 minutes"
    pub cooking_time: Option<String>,
    /// First temperature expression found in the text, e.g. "350°F"
    pub temperature: Option<String>,
    pub difficulty: Difficulty,
    pub cuisine_type: String,
    /// Dietary tags in tag-definition order, without duplicates
    pub dietary_info: Vec<String>,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cooking_time: None,
            temperature: None,
            difficulty: Difficulty::default(),
            cuisine_type: GENERAL_CUISINE.to_string(),
            dietary_info: Vec::new(),
        }
    }
}
