//! Health assessment
//!
//! Judges a meal from its macronutrient totals.

pub mod policy;

pub use policy::{HealthPolicy, MacroBalancePolicy};
