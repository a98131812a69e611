//! Nutrition resolution module
//!
//! Quantity parsing and unit conversion, the Nutritionix lookup, the
//! fallback estimator and meal totals.

pub mod converter;
pub mod estimator;
pub mod lookup;
pub mod resolver;
pub mod totals;
pub mod units;

pub use converter::{parse_quantity, parse_unit, quantity_to_grams, Quantity};
pub use estimator::{MacroEstimator, ReferenceEstimator, ReferenceFood};
pub use lookup::{classify_response, LookupOutcome, NutritionLookup, NutritionixClient};
pub use resolver::NutritionResolver;
pub use totals::{calculate_totals, totals_for};
pub use units::{categorize_unit, grams_per_unit, ml_per_unit, ParsedUnit, UnitCategory};
