use crate::model::Ingredient;
use crate::parser::quantity;

/// Parse a raw ingredients section into ingredient records
///
/// Blank lines are skipped; every other line yields exactly one ingredient,
/// in source order. Lines without structure become name-only entries.
pub fn parse_ingredients(section: &str) -> Vec<Ingredient> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(quantity::tokenize)
        .collect()
}
