//! Data models
//!
//! Transient structs scoped to a single analysis run.

mod assessment;
mod ingredient;
mod nutrition;

pub use assessment::HealthAssessment;
pub use ingredient::{Ingredient, NutritionSource, ResolvedIngredient};
pub use nutrition::{
    NutritionRecord, Totals, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
