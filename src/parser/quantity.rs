use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::model::Ingredient;

/// "2 cups flour", "500g butter"
static AMOUNT_UNIT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*(\p{Alphabetic}+)\s+(.+)$").unwrap()
});

/// "1 egg", "2 14-oz cans tomatoes", "3x". A rest attached to the number may
/// not start with a digit, '.' or '/', so "12" and "1/2 cup" are never split
/// into a shorter leading number.
static AMOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)(?:\s+(.+)|([^\d\s./].*))$").unwrap()
});

/// "salt to taste"
static TO_TASTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+)\s+to\s+taste").unwrap());

/// The quantity rules, in priority order. Only the first match applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuantityRule {
    AmountUnitName,
    AmountName,
    ToTaste,
}

const RULES: [QuantityRule; 3] = [
    QuantityRule::AmountUnitName,
    QuantityRule::AmountName,
    QuantityRule::ToTaste,
];

impl QuantityRule {
    fn pattern(&self) -> &'static Regex {
        match self {
            QuantityRule::AmountUnitName => &*AMOUNT_UNIT_NAME,
            QuantityRule::AmountName => &*AMOUNT_NAME,
            QuantityRule::ToTaste => &*TO_TASTE,
        }
    }

    fn build(&self, caps: &Captures, line: &str) -> Option<Ingredient> {
        let (amount, unit, name) = match self {
            QuantityRule::AmountUnitName => (
                positive_amount(&caps[1])?,
                Some(caps[2].to_lowercase()),
                caps[3].trim(),
            ),
            QuantityRule::AmountName => {
                let rest = caps.get(2).or_else(|| caps.get(3))?.as_str().trim();
                // "1 1/2 cups" is a mixed number, not one item of "1/2 cups"
                if starts_with_fraction(rest) {
                    return None;
                }
                (positive_amount(&caps[1])?, None, rest)
            }
            QuantityRule::ToTaste => (None, None, caps[1].trim().trim_end_matches(',').trim_end()),
        };

        if name.is_empty() {
            return None;
        }

        Some(Ingredient {
            amount,
            unit,
            name: name.to_string(),
            original: line.to_string(),
        })
    }
}

/// Parsed amount, or `None` inside when it is zero
///
/// The outer `None` means the number did not parse and the rule fails.
fn positive_amount(number: &str) -> Option<Option<f64>> {
    let amount = number.parse::<f64>().ok()?;
    Some((amount > 0.0).then_some(amount))
}

fn starts_with_fraction(rest: &str) -> bool {
    let after_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    after_digits.len() < rest.len() && after_digits.starts_with('/')
}

/// Split one ingredient line into amount, unit and name
///
/// The line is trimmed first. Rules are tried in priority order and
/// the first one that matches wins; when none does, the whole line becomes
/// the name.
pub fn tokenize(line: &str) -> Ingredient {
    let line = line.trim();

    for rule in RULES {
        if let Some(caps) = rule.pattern().captures(line) {
            if let Some(ingredient) = rule.build(&caps, line) {
                return ingredient;
            }
        }
    }

    Ingredient::name_only(line)
}
