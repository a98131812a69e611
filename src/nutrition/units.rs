//! Unit types and conversion constants
//!
//! Provides types for representing measurement units and standard conversion factors.

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Weight/mass units (g, oz, lb, kg)
    Weight,
    /// Volume units (ml, tbsp, cup, etc.)
    Volume,
    /// Count/discrete units (each, piece, slice), or no unit at all ("2 eggs")
    Count,
    /// Servings or portions of unspecified size
    Serving,
    /// Anything else (pinch, handful, drizzle)
    Custom,
}

/// A parsed unit with optional gram weight annotation
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    /// The base unit string (e.g., "tbsp" from "tbsp (20g)")
    pub base_unit: String,
    /// Gram weight if annotated (e.g., 20.0 from "(20g)")
    pub gram_weight: Option<f64>,
    /// Milliliter amount if annotated (e.g., 15.0 from "(15ml)")
    pub ml_amount: Option<f64>,
    /// The category of this unit
    pub category: UnitCategory,
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Get the conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "g" | "gram" | "grams" | "gr" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Get the conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(1.0),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(ML_PER_LITER),
        "tsp" | "teaspoon" | "teaspoons" => Some(ML_PER_TSP),
        "tbsp" | "tablespoon" | "tablespoons" => Some(ML_PER_TBSP),
        "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(ML_PER_FL_OZ),
        "cup" | "cups" => Some(ML_PER_CUP),
        "pint" | "pints" => Some(ML_PER_PINT),
        "quart" | "quarts" => Some(ML_PER_QUART),
        "gallon" | "gallons" => Some(ML_PER_GALLON),
        _ => None,
    }
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    // Check weight units
    if grams_per_unit(trimmed).is_some() {
        return UnitCategory::Weight;
    }

    // Check volume units
    if ml_per_unit(trimmed).is_some() {
        return UnitCategory::Volume;
    }

    // Check count and serving units
    match trimmed {
        "" | "each" | "piece" | "pieces" | "item" | "items" | "count" | "whole" | "slice"
        | "slices" => UnitCategory::Count,
        "serving" | "servings" | "portion" | "portions" => UnitCategory::Serving,
        _ => UnitCategory::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_weight_units() {
        assert_eq!(categorize_unit("g"), UnitCategory::Weight);
        assert_eq!(categorize_unit("gram"), UnitCategory::Weight);
        assert_eq!(categorize_unit("oz"), UnitCategory::Weight);
        assert_eq!(categorize_unit("LB"), UnitCategory::Weight);
        assert_eq!(categorize_unit("kg"), UnitCategory::Weight);
    }

    #[test]
    fn test_categorize_volume_units() {
        assert_eq!(categorize_unit("ml"), UnitCategory::Volume);
        assert_eq!(categorize_unit("tbsp"), UnitCategory::Volume);
        assert_eq!(categorize_unit("cup"), UnitCategory::Volume);
        assert_eq!(categorize_unit("tsp"), UnitCategory::Volume);
    }

    #[test]
    fn test_categorize_count_and_serving_units() {
        assert_eq!(categorize_unit("each"), UnitCategory::Count);
        assert_eq!(categorize_unit(""), UnitCategory::Count);
        assert_eq!(categorize_unit("slice"), UnitCategory::Count);
        assert_eq!(categorize_unit("serving"), UnitCategory::Serving);
    }

    #[test]
    fn test_categorize_custom_units() {
        assert_eq!(categorize_unit("pinch"), UnitCategory::Custom);
        assert_eq!(categorize_unit("handful"), UnitCategory::Custom);
    }

    #[test]
    fn test_categorize_ignores_case_and_padding() {
        assert_eq!(categorize_unit("  Tbsp "), UnitCategory::Volume);
        assert_eq!(categorize_unit(" KG"), UnitCategory::Weight);
        assert_eq!(categorize_unit("Servings "), UnitCategory::Serving);
        assert_eq!(categorize_unit(" "), UnitCategory::Count);
    }

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("g"), Some(1.0));
        assert_eq!(grams_per_unit("oz"), Some(G_PER_OZ));
        assert_eq!(grams_per_unit("lb"), Some(G_PER_LB));
        assert_eq!(grams_per_unit("tbsp"), None);
    }

    #[test]
    fn test_ml_per_unit() {
        assert_eq!(ml_per_unit("ml"), Some(1.0));
        assert_eq!(ml_per_unit("tbsp"), Some(ML_PER_TBSP));
        assert_eq!(ml_per_unit("cup"), Some(ML_PER_CUP));
        assert_eq!(ml_per_unit("g"), None);
    }
}
