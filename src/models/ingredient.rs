//! Ingredient model
//!
//! What the recognizer saw on the plate, and what the resolver made of it.

use super::NutritionRecord;

/// One recognized ingredient with its quantity, e.g. ("broccoli", "150g")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Amount with embedded unit
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Natural-language form used for nutrition lookups
    pub fn query(&self) -> String {
        format!("{} of {}", self.quantity, self.name)
    }
}

/// Where a nutrition record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionSource {
    /// Measured data from the Nutritionix database
    Nutritionix,
    /// Local reference-table estimate
    Estimated,
}

impl NutritionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionSource::Nutritionix => "nutritionix",
            NutritionSource::Estimated => "estimated",
        }
    }
}

/// An ingredient paired with its resolved nutrition, if any
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIngredient {
    pub ingredient: Ingredient,
    /// `None` when neither the service nor the estimator could produce data
    pub nutrition: Option<NutritionRecord>,
    pub source: NutritionSource,
}
