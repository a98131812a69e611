//! Meal analyzer
//!
//! Runs the whole pipeline for one photo: recognize, resolve each ingredient,
//! total, assess, render. Any error aborts the run.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::health::{HealthPolicy, MacroBalancePolicy};
use crate::models::{HealthAssessment, Ingredient, ResolvedIngredient, Totals};
use crate::nutrition::{totals_for, NutritionResolver, NutritionixClient, ReferenceEstimator};
use crate::report::render_report;
use crate::vision::{IngredientRecognizer, VisionRecognizer};

/// Everything learned about one meal
#[derive(Debug, Clone)]
pub struct MealAnalysis {
    pub entries: Vec<ResolvedIngredient>,
    pub totals: Totals,
    pub assessment: HealthAssessment,
}

impl MealAnalysis {
    pub fn report(&self) -> String {
        render_report(&self.entries, &self.totals, &self.assessment)
    }
}

pub struct MealAnalyzer {
    recognizer: Box<dyn IngredientRecognizer>,
    resolver: NutritionResolver,
    policy: Box<dyn HealthPolicy>,
}

impl MealAnalyzer {
    pub fn new(
        recognizer: Box<dyn IngredientRecognizer>,
        resolver: NutritionResolver,
        policy: Box<dyn HealthPolicy>,
    ) -> Self {
        Self {
            recognizer,
            resolver,
            policy,
        }
    }

    /// Validate configuration, load the model and wire up the default strategies
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let lookup = NutritionixClient::new(&config.nutritionix)?;
        let resolver = NutritionResolver::new(
            Box::new(lookup),
            Box::new(ReferenceEstimator::default()),
        );
        let recognizer = VisionRecognizer::from_config(&config.vision)?;

        Ok(Self::new(
            Box::new(recognizer),
            resolver,
            Box::new(MacroBalancePolicy::default()),
        ))
    }

    /// Analyze a meal photo
    pub fn analyze(&self, image_path: &Path) -> Result<MealAnalysis> {
        tracing::info!("Analyzing {}", image_path.display());
        let ingredients = self.recognizer.recognize(image_path)?;
        Ok(self.analyze_ingredients(&ingredients))
    }

    /// Resolve, total and assess an already-recognized ingredient list
    pub fn analyze_ingredients(&self, ingredients: &[Ingredient]) -> MealAnalysis {
        let entries = self.resolver.resolve_all(ingredients);
        let totals = totals_for(&entries);
        let assessment = self.policy.assess(&totals);

        tracing::info!(
            "Meal totals: {:.0} kcal, {:.1}g protein, {:.1}g fat, {:.1}g carbs ({})",
            totals.calories,
            totals.protein_g,
            totals.fat_g,
            totals.carbs_g,
            if assessment.is_healthy { "healthy" } else { "unhealthy" }
        );

        MealAnalysis {
            entries,
            totals,
            assessment,
        }
    }
}
