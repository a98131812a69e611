//! Fallback macronutrient estimator
//!
//! Used when the nutrition service has no data. Estimates come from a small
//! built-in table of per-100 g reference values scaled by the quantity.

use super::converter::{parse_quantity, quantity_to_grams, FoodMass};
use crate::models::{Ingredient, NutritionRecord};

/// Produces approximate macronutrients without any external call
pub trait MacroEstimator {
    /// `None` when the quantity cannot be interpreted for this ingredient
    fn estimate(&self, ingredient: &Ingredient) -> Option<NutritionRecord>;
}

/// Grams assumed for "1 serving" / "1 portion"
pub const DEFAULT_SERVING_G: f64 = 100.0;

/// Reference values for one food
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFood {
    pub name: &'static str,
    pub per_100g: NutritionRecord,
    /// Grams per milliliter
    pub density: f64,
    /// Weight of one whole item
    pub grams_each: Option<f64>,
}

const fn food(
    name: &'static str,
    calories: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    density: f64,
    grams_each: Option<f64>,
) -> ReferenceFood {
    ReferenceFood {
        name,
        per_100g: NutritionRecord::new(calories, protein_g, fat_g, carbs_g),
        density,
        grams_each,
    }
}

/// Profile for ingredients missing from the table (a generic mixed dish)
pub const GENERIC_FOOD: ReferenceFood = food("generic", 150.0, 6.0, 6.0, 18.0, 1.0, None);

// Cooked weights for grains, pasta and legumes
const REFERENCE_FOODS: &[ReferenceFood] = &[
    // Proteins
    food("chicken breast", 165.0, 31.0, 3.6, 0.0, 1.0, Some(170.0)),
    food("chicken thigh", 209.0, 26.0, 10.9, 0.0, 1.0, Some(116.0)),
    food("chicken", 239.0, 27.0, 14.0, 0.0, 1.0, None),
    food("ground beef", 254.0, 17.0, 20.0, 0.0, 1.0, None),
    food("steak", 271.0, 25.0, 19.0, 0.0, 1.0, Some(220.0)),
    food("beef", 250.0, 26.0, 15.0, 0.0, 1.0, None),
    food("pork", 242.0, 27.0, 14.0, 0.0, 1.0, None),
    food("bacon", 541.0, 37.0, 42.0, 1.4, 1.0, Some(8.0)),
    food("salmon", 208.0, 20.0, 13.0, 0.0, 1.0, Some(170.0)),
    food("tuna", 132.0, 28.0, 1.3, 0.0, 1.0, None),
    food("shrimp", 99.0, 24.0, 0.3, 0.2, 1.0, Some(6.0)),
    food("tofu", 76.0, 8.0, 4.8, 1.9, 1.0, None),
    food("egg", 143.0, 12.6, 9.5, 0.7, 1.03, Some(50.0)),
    food("black beans", 132.0, 8.9, 0.5, 23.7, 0.75, None),
    food("beans", 127.0, 8.7, 0.5, 22.8, 0.75, None),
    // Vegetables and fruit
    food("broccoli", 34.0, 2.8, 0.4, 7.0, 0.38, None),
    food("spinach", 23.0, 2.9, 0.4, 3.6, 0.13, None),
    food("lettuce", 15.0, 1.4, 0.2, 2.9, 0.2, None),
    food("carrot", 41.0, 0.9, 0.2, 9.6, 0.54, Some(61.0)),
    food("tomato", 18.0, 0.9, 0.2, 3.9, 0.76, Some(123.0)),
    food("onion", 40.0, 1.1, 0.1, 9.3, 0.68, Some(110.0)),
    food("sweet potato", 86.0, 1.6, 0.1, 20.0, 0.56, Some(130.0)),
    food("potato", 77.0, 2.0, 0.1, 17.0, 0.63, Some(213.0)),
    food("french fries", 312.0, 3.4, 15.0, 41.0, 0.4, None),
    food("avocado", 160.0, 2.0, 14.7, 8.5, 0.97, Some(150.0)),
    food("apple", 52.0, 0.3, 0.2, 14.0, 0.53, Some(182.0)),
    food("banana", 89.0, 1.1, 0.3, 23.0, 0.95, Some(118.0)),
    // Grains
    food("brown rice", 112.0, 2.3, 0.8, 23.5, 0.8, None),
    food("rice", 130.0, 2.7, 0.3, 28.0, 0.67, None),
    food("pasta", 131.0, 5.0, 1.1, 25.0, 0.6, None),
    food("quinoa", 120.0, 4.4, 1.9, 21.3, 0.78, None),
    food("oats", 389.0, 16.9, 6.9, 66.0, 0.34, None),
    food("bread", 265.0, 9.0, 3.2, 49.0, 0.3, Some(30.0)),
    food("pizza", 266.0, 11.0, 10.0, 33.0, 0.5, Some(107.0)),
    // Dairy
    food("cheese", 402.0, 25.0, 33.0, 1.3, 0.5, Some(28.0)),
    food("milk", 42.0, 3.4, 1.0, 5.0, 1.03, None),
    food("yogurt", 59.0, 10.0, 0.4, 3.6, 1.03, None),
    food("butter", 717.0, 0.9, 81.0, 0.1, 0.91, None),
    // Fats, sauces, sugar
    food("olive oil", 884.0, 0.0, 100.0, 0.0, 0.91, None),
    food("oil", 884.0, 0.0, 100.0, 0.0, 0.92, None),
    food("mayonnaise", 680.0, 1.0, 75.0, 0.6, 0.91, None),
    food("ketchup", 112.0, 1.7, 0.1, 26.0, 1.1, None),
    food("sugar", 387.0, 0.0, 0.0, 100.0, 0.85, None),
];

/// Table-driven estimator
pub struct ReferenceEstimator {
    foods: Vec<ReferenceFood>,
    generic: ReferenceFood,
}

impl Default for ReferenceEstimator {
    fn default() -> Self {
        Self {
            foods: REFERENCE_FOODS.to_vec(),
            generic: GENERIC_FOOD,
        }
    }
}

impl ReferenceEstimator {
    /// Find the reference entry for an ingredient name
    ///
    /// Exact name first, then the longest table name appearing as a whole
    /// phrase in the ingredient ("grilled chicken breast" -> "chicken breast").
    pub fn find(&self, name: &str) -> Option<&ReferenceFood> {
        let lower = name.trim().to_lowercase();
        if let Some(exact) = self.foods.iter().find(|f| f.name == lower) {
            return Some(exact);
        }

        let words: Vec<&str> = lower.split_whitespace().collect();
        self.foods
            .iter()
            .filter(|f| contains_phrase(&words, f.name))
            .max_by_key(|f| f.name.len())
    }
}

impl MacroEstimator for ReferenceEstimator {
    fn estimate(&self, ingredient: &Ingredient) -> Option<NutritionRecord> {
        let quantity = match parse_quantity(&ingredient.quantity) {
            Some(q) => q,
            None => {
                tracing::warn!(
                    "Cannot parse quantity '{}' for {}",
                    ingredient.quantity,
                    ingredient.name
                );
                return None;
            }
        };

        let reference = match self.find(&ingredient.name) {
            Some(found) => found,
            None => {
                tracing::debug!(
                    "No reference entry for '{}'; using generic profile",
                    ingredient.name
                );
                &self.generic
            }
        };

        let mass = FoodMass {
            density: reference.density,
            grams_each: reference.grams_each,
            grams_per_serving: DEFAULT_SERVING_G,
        };
        let grams = quantity_to_grams(&quantity, &mass)?;

        tracing::debug!(
            "Estimated {} ({}) as {:.1}g of '{}'",
            ingredient.name,
            ingredient.quantity,
            grams,
            reference.name
        );
        Some(reference.per_100g.scale(grams / 100.0))
    }
}

/// Whole-word phrase match, tolerating a plural on the last word
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let target: Vec<&str> = phrase.split_whitespace().collect();
    if target.is_empty() || target.len() > words.len() {
        return false;
    }
    let last = target.len() - 1;

    words.windows(target.len()).any(|window| {
        window.iter().zip(&target).enumerate().all(|(i, (word, want))| {
            if i == last {
                word_matches_plural(word, want)
            } else {
                word == want
            }
        })
    })
}

fn word_matches_plural(word: &str, singular: &str) -> bool {
    matches!(word.strip_prefix(singular), Some("" | "s" | "es"))
}
