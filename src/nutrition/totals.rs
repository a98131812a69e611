//! Meal totals
//!
//! Field-wise sum over every resolved record. Absent records are skipped.

use crate::models::{NutritionRecord, ResolvedIngredient, Totals};

/// Sum a sequence of optional records
pub fn calculate_totals<'a, I>(records: I) -> Totals
where
    I: IntoIterator<Item = &'a Option<NutritionRecord>>,
{
    records.into_iter().flatten().sum()
}

/// Totals for a list of resolved ingredients
pub fn totals_for(entries: &[ResolvedIngredient]) -> Totals {
    calculate_totals(entries.iter().map(|e| &e.nutrition))
}
