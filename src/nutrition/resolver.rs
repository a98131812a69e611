//! Nutrition resolver
//!
//! Asks the lookup service first and falls back to the estimator whenever the
//! service does not come back with data. There is no retry.

use super::estimator::MacroEstimator;
use super::lookup::{LookupOutcome, NutritionLookup};
use crate::models::{Ingredient, NutritionSource, ResolvedIngredient};

pub struct NutritionResolver {
    lookup: Box<dyn NutritionLookup>,
    estimator: Box<dyn MacroEstimator>,
}

impl NutritionResolver {
    pub fn new(lookup: Box<dyn NutritionLookup>, estimator: Box<dyn MacroEstimator>) -> Self {
        Self { lookup, estimator }
    }

    /// Resolve one ingredient
    ///
    /// Transport and payload errors from the lookup are logged and handled
    /// exactly like a non-200 answer.
    pub fn resolve(&self, ingredient: &Ingredient) -> ResolvedIngredient {
        match self.lookup.lookup(ingredient) {
            Ok(LookupOutcome::Found(record)) => {
                tracing::info!(
                    "Resolved {} ({}) from Nutritionix",
                    ingredient.name,
                    ingredient.quantity
                );
                return ResolvedIngredient {
                    ingredient: ingredient.clone(),
                    nutrition: Some(record),
                    source: NutritionSource::Nutritionix,
                };
            }
            Ok(LookupOutcome::NoData { status }) => {
                tracing::warn!(
                    "Nutritionix returned no data for '{}' (HTTP {}); estimating",
                    ingredient.query(),
                    status
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Nutritionix lookup failed for '{}': {}; estimating",
                    ingredient.query(),
                    e
                );
            }
        }

        let nutrition = self.estimator.estimate(ingredient);
        if nutrition.is_none() {
            tracing::warn!(
                "No nutrition data available for {} ({})",
                ingredient.name,
                ingredient.quantity
            );
        }

        ResolvedIngredient {
            ingredient: ingredient.clone(),
            nutrition,
            source: NutritionSource::Estimated,
        }
    }

    /// Resolve every ingredient in order, one request at a time
    pub fn resolve_all(&self, ingredients: &[Ingredient]) -> Vec<ResolvedIngredient> {
        ingredients.iter().map(|i| self.resolve(i)).collect()
    }
}
