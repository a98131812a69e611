//! mealscan library
//!
//! Estimates a meal's macronutrients from a photograph.

pub mod analyzer;
pub mod build_info;
pub mod config;
pub mod error;
pub mod health;
pub mod models;
pub mod nutrition;
pub mod report;
pub mod vision;

pub use analyzer::{MealAnalysis, MealAnalyzer};
pub use config::Config;
pub use error::{Error, Result};
