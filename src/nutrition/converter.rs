//! Unit conversion functions
//!
//! Parses quantity strings such as "200g", "1 tbsp" or "1 1/2 cups" and
//! converts them to grams.

use super::units::{categorize_unit, grams_per_unit, ml_per_unit, ParsedUnit, UnitCategory};

/// A quantity string split into its amount and unit
#[derive(Debug, Clone)]
pub struct Quantity {
    pub amount: f64,
    pub unit: ParsedUnit,
}

/// Parse a unit string, extracting any gram or ml annotation
///
/// Examples:
/// - "g" -> ParsedUnit { base_unit: "g", gram_weight: None, ... }
/// - "tbsp (20g)" -> ParsedUnit { base_unit: "tbsp", gram_weight: Some(20.0), ... }
/// - "cup (240ml)" -> ParsedUnit { base_unit: "cup", ml_amount: Some(240.0), ... }
pub fn parse_unit(unit_str: &str) -> ParsedUnit {
    let trimmed = unit_str.trim();

    // Try to extract parenthetical annotation like "(20g)" or "(240ml)"
    if let (Some(paren_start), Some(paren_end)) = (trimmed.find('('), trimmed.find(')')) {
        if paren_start < paren_end {
            let base_unit = trimmed[..paren_start].trim().to_lowercase();
            let annotation = &trimmed[paren_start + 1..paren_end];
            let category = categorize_unit(&base_unit);

            return ParsedUnit {
                gram_weight: parse_gram_annotation(annotation),
                ml_amount: parse_ml_annotation(annotation),
                base_unit,
                category,
            };
        }
    }

    // No annotation - just parse the base unit
    let base_unit = trimmed.to_lowercase();
    let category = categorize_unit(&base_unit);

    ParsedUnit {
        base_unit,
        gram_weight: None,
        ml_amount: None,
        category,
    }
}

/// Parse a gram annotation like "20g" or "20 g" or "20 grams"
fn parse_gram_annotation(s: &str) -> Option<f64> {
    parse_suffixed(s, &["grams", "gram", "g"])
}

/// Parse a ml annotation like "240ml" or "240 ml"
fn parse_ml_annotation(s: &str) -> Option<f64> {
    parse_suffixed(s, &["milliliters", "milliliter", "millilitres", "millilitre", "ml"])
}

fn parse_suffixed(s: &str, suffixes: &[&str]) -> Option<f64> {
    let lower = s.to_lowercase();
    let trimmed = lower.trim();

    // Try patterns: "20g", "20 g", "20grams", "20 grams"
    for suffix in suffixes {
        if let Some(num_part) = trimmed.strip_suffix(suffix) {
            if let Ok(val) = num_part.trim().parse::<f64>() {
                return Some(val);
            }
        }
    }

    None
}

/// Parse a quantity string into amount and unit
///
/// Accepts integers, decimals, fractions and mixed numbers, with or without
/// a space before the unit: "200g", "1.5 cups", "1/2 cup", "1 1/2 tbsp",
/// "3 eggs", "a pinch". Returns `None` when no amount can be found.
pub fn parse_quantity(quantity: &str) -> Option<Quantity> {
    let lower = quantity.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    let (mut amount, mut rest) = match split_number(&lower) {
        Some((value, rest)) => (value, rest),
        // Spelled-out single amounts: "a pinch", "one slice"
        None => {
            let (word, rest) = lower
                .split_once(char::is_whitespace)
                .unwrap_or((lower.as_str(), ""));
            match word {
                "a" | "an" | "one" => (1.0, rest),
                _ => return None,
            }
        }
    };

    // Mixed number: "1 1/2 cups"
    let trimmed_rest = rest.trim_start();
    if trimmed_rest.len() < rest.len() {
        if let Some((fraction, after)) = split_number(trimmed_rest) {
            let token = &trimmed_rest[..trimmed_rest.len() - after.len()];
            if token.contains('/') {
                amount += fraction;
                rest = after;
            }
        }
    }

    let unit_str = rest.trim();
    let unit_str = unit_str.strip_prefix("of ").unwrap_or(unit_str);

    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    Some(Quantity {
        amount,
        unit: parse_unit(unit_str),
    })
}

/// Split a leading number ("200", "1.5", "1/2") off a string
fn split_number(s: &str) -> Option<(f64, &str)> {
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '/'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let token = &s[..end];
    let value = match token.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => token.parse().ok()?,
    };

    Some((value, &s[end..]))
}

/// Physical properties of a food needed to turn any quantity into grams
#[derive(Debug, Clone, Copy)]
pub struct FoodMass {
    /// Grams per milliliter
    pub density: f64,
    /// Weight of one whole item, for countable foods
    pub grams_each: Option<f64>,
    /// Weight of one serving
    pub grams_per_serving: f64,
}

/// Convert a parsed quantity to grams for a given food
///
/// Returns None for units that have no meaningful conversion (e.g. "a pinch"
/// of something with no per-item weight).
pub fn quantity_to_grams(quantity: &Quantity, food: &FoodMass) -> Option<f64> {
    let unit = &quantity.unit;

    // If the unit itself has a gram annotation, use that
    if let Some(grams) = unit.gram_weight {
        return Some(quantity.amount * grams);
    }
    // Same for an ml annotation, through the food's density
    if let Some(ml) = unit.ml_amount {
        return Some(quantity.amount * ml * food.density);
    }

    match unit.category {
        UnitCategory::Weight => grams_per_unit(&unit.base_unit).map(|f| quantity.amount * f),
        UnitCategory::Volume => {
            ml_per_unit(&unit.base_unit).map(|f| quantity.amount * f * food.density)
        }
        UnitCategory::Serving => Some(quantity.amount * food.grams_per_serving),
        // "3 eggs" parses with the food noun as its unit
        UnitCategory::Count | UnitCategory::Custom => {
            let grams = food.grams_each.map(|g| quantity.amount * g);
            if grams.is_none() {
                tracing::debug!(
                    "No per-item weight for unit '{}'; cannot convert to grams",
                    unit.base_unit
                );
            }
            grams
        }
    }
}
