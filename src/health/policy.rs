//! Health policies
//!
//! A policy looks only at meal totals and returns a verdict with suggestions.

use crate::models::{
    HealthAssessment, Totals, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Classifies a meal from its totals
pub trait HealthPolicy {
    fn assess(&self, totals: &Totals) -> HealthAssessment;
}

/// Rule-based policy on meal energy and macronutrient energy shares
///
/// Each violated rule adds one suggestion, in rule order.
#[derive(Debug, Clone)]
pub struct MacroBalancePolicy {
    pub max_calories: f64,
    /// Maximum fraction of energy from fat
    pub max_fat_share: f64,
    /// Maximum fraction of energy from carbohydrates
    pub max_carb_share: f64,
    /// Minimum fraction of energy from protein
    pub min_protein_share: f64,
}

impl Default for MacroBalancePolicy {
    fn default() -> Self {
        Self {
            max_calories: 800.0,
            max_fat_share: 0.35,
            max_carb_share: 0.65,
            min_protein_share: 0.10,
        }
    }
}

impl HealthPolicy for MacroBalancePolicy {
    fn assess(&self, totals: &Totals) -> HealthAssessment {
        let energy = if totals.calories > 0.0 {
            totals.calories
        } else {
            totals.macro_energy()
        };
        if energy <= 0.0 {
            return HealthAssessment::healthy();
        }

        let fat_share = totals.fat_g * KCAL_PER_G_FAT / energy;
        let carb_share = totals.carbs_g * KCAL_PER_G_CARBS / energy;
        let protein_share = totals.protein_g * KCAL_PER_G_PROTEIN / energy;

        let mut suggestions = Vec::new();
        if totals.calories > self.max_calories {
            suggestions.push(format!(
                "Reduce the portion size: this meal has {:.0} kcal, above the {:.0} kcal target",
                totals.calories, self.max_calories
            ));
        }
        if fat_share > self.max_fat_share {
            suggestions.push(format!(
                "Cut back on added fats ({:.0}% of energy): use a teaspoon of oil instead of a tablespoon, or grill instead of frying",
                fat_share * 100.0
            ));
        }
        if carb_share > self.max_carb_share {
            suggestions.push(format!(
                "Swap some refined carbohydrates ({:.0}% of energy) for vegetables or whole grains",
                carb_share * 100.0
            ));
        }
        if protein_share < self.min_protein_share {
            suggestions.push(
                "Add a lean protein such as grilled chicken, fish, tofu, beans or eggs".to_string(),
            );
        }

        tracing::debug!(
            "Energy shares: fat {:.2}, carbs {:.2}, protein {:.2}",
            fat_share,
            carb_share,
            protein_share
        );

        if suggestions.is_empty() {
            HealthAssessment::healthy()
        } else {
            HealthAssessment::unhealthy(suggestions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionRecord;

    #[test]
    fn test_balanced_meal_is_healthy() {
        // 600 kcal: 25% protein, 30% fat, 45% carbs
        let totals = NutritionRecord::new(600.0, 37.5, 20.0, 67.5);
        let assessment = MacroBalancePolicy::default().assess(&totals);
        assert!(assessment.is_healthy);
        assert!(assessment.suggestions.is_empty());
    }

    #[test]
    fn test_fatty_meal_is_unhealthy() {
        let totals = NutritionRecord::new(420.0, 34.0, 22.0, 15.0);
        let assessment = MacroBalancePolicy::default().assess(&totals);
        assert!(!assessment.is_healthy);
        assert_eq!(assessment.suggestions.len(), 1);
        assert!(assessment.suggestions[0].contains("fats"));
    }

    #[test]
    fn test_rules_apply_in_order() {
        // 1200 kcal of mostly sugar
        let totals = NutritionRecord::new(1200.0, 5.0, 10.0, 270.0);
        let assessment = MacroBalancePolicy::default().assess(&totals);
        assert!(!assessment.is_healthy);
        assert_eq!(assessment.suggestions.len(), 3);
        assert!(assessment.suggestions[0].contains("portion"));
        assert!(assessment.suggestions[1].contains("carbohydrates"));
        assert!(assessment.suggestions[2].contains("protein"));
    }

    #[test]
    fn test_zero_calories_uses_macro_energy() {
        let totals = NutritionRecord::new(0.0, 0.0, 20.0, 0.0);
        let assessment = MacroBalancePolicy::default().assess(&totals);
        assert!(!assessment.is_healthy);
    }

    #[test]
    fn test_empty_meal_is_healthy() {
        let assessment = MacroBalancePolicy::default().assess(&NutritionRecord::zero());
        assert!(assessment.is_healthy);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = MacroBalancePolicy {
            max_calories: 300.0,
            ..MacroBalancePolicy::default()
        };
        let totals = NutritionRecord::new(600.0, 37.5, 20.0, 67.5);
        assert!(!strict.assess(&totals).is_healthy);
    }
}
