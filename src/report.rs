//! Report rendering
//!
//! Formats an analysis as the text shown to the user.

use crate::models::{HealthAssessment, NutritionSource, ResolvedIngredient, Totals};

/// One summary line for an ingredient
pub fn summarize_nutrition(entry: &ResolvedIngredient) -> String {
    let ingredient = &entry.ingredient;
    match &entry.nutrition {
        Some(n) => {
            let mut line = format!(
                "- {} ({}): {} kcal, {}g protein, {}g fat, {}g carbs",
                ingredient.name,
                ingredient.quantity,
                fmt_amount(n.calories),
                fmt_amount(n.protein_g),
                fmt_amount(n.fat_g),
                fmt_amount(n.carbs_g)
            );
            if entry.source == NutritionSource::Estimated {
                line.push_str(&format!(" ({})", entry.source.as_str()));
            }
            line
        }
        None => format!(
            "- {} ({}): no nutrition data available",
            ingredient.name, ingredient.quantity
        ),
    }
}

/// Render the full report
pub fn render_report(
    entries: &[ResolvedIngredient],
    totals: &Totals,
    assessment: &HealthAssessment,
) -> String {
    let mut out = String::from("Here's the analysis of your meal:\n\n");

    for entry in entries {
        out.push_str(&summarize_nutrition(entry));
        out.push('\n');
    }

    out.push_str(&format!(
        "\n**Total Macronutrients**:\n\
         - Calories: {} kcal\n\
         - Protein: {}g\n\
         - Fat: {}g\n\
         - Carbs: {}g\n\n",
        fmt_amount(totals.calories),
        fmt_amount(totals.protein_g),
        fmt_amount(totals.fat_g),
        fmt_amount(totals.carbs_g)
    ));

    if assessment.is_healthy {
        out.push_str("This meal is **healthy**. Great choice!\n");
    } else {
        out.push_str("This meal is **unhealthy**. Here are some healthier alternatives:\n");
        for suggestion in &assessment.suggestions {
            out.push_str("- ");
            out.push_str(suggestion);
            out.push('\n');
        }
    }

    out
}

/// At most one decimal place, no trailing ".0"
fn fmt_amount(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.1}", rounded);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, NutritionRecord};

    fn entry(
        name: &str,
        qty: &str,
        n: Option<NutritionRecord>,
        source: NutritionSource,
    ) -> ResolvedIngredient {
        ResolvedIngredient {
            ingredient: Ingredient::new(name, qty),
            nutrition: n,
            source,
        }
    }

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(420.0), "420");
        assert_eq!(fmt_amount(7.14), "7.1");
        assert_eq!(fmt_amount(118.951), "119");
        assert_eq!(fmt_amount(0.04), "0");
        assert_eq!(fmt_amount(-0.0), "0");
    }

    #[test]
    fn test_unhealthy_report_lists_suggestions() {
        let entries = vec![entry(
            "chicken breast",
            "200g",
            Some(NutritionRecord::new(250.0, 30.0, 8.0, 5.0)),
            NutritionSource::Nutritionix,
        )];
        let totals = NutritionRecord::new(250.0, 30.0, 8.0, 5.0);
        let assessment =
            HealthAssessment::unhealthy(vec!["Use grilled tofu instead of chicken".to_string()]);

        let report = render_report(&entries, &totals, &assessment);
        assert!(report.contains("unhealthy"));
        assert!(report.contains("Use grilled tofu instead of chicken"));
        assert!(report
            .contains("- chicken breast (200g): 250 kcal, 30g protein, 8g fat, 5g carbs\n"));
        assert!(!report.contains("(estimated)"));
    }

    #[test]
    fn test_marker_only_on_estimated_lines() {
        let record = Some(NutritionRecord::new(200.0, 4.0, 0.5, 45.0));
        let measured = summarize_nutrition(&entry(
            "rice",
            "1 cup",
            record,
            NutritionSource::Nutritionix,
        ));
        let estimated =
            summarize_nutrition(&entry("rice", "1 cup", record, NutritionSource::Estimated));

        assert_eq!(
            measured,
            "- rice (1 cup): 200 kcal, 4g protein, 0.5g fat, 45g carbs"
        );
        assert_eq!(
            estimated,
            "- rice (1 cup): 200 kcal, 4g protein, 0.5g fat, 45g carbs (estimated)"
        );
    }

    #[test]
    fn test_healthy_report() {
        let report = render_report(&[], &NutritionRecord::zero(), &HealthAssessment::healthy());
        assert!(report.contains("This meal is **healthy**. Great choice!"));
        assert!(!report.contains("unhealthy"));
        assert!(report.contains("- Calories: 0 kcal"));
    }

    #[test]
    fn test_totals_block_and_markers() {
        let entries = vec![
            entry(
                "olive oil",
                "1 tbsp",
                Some(NutritionRecord::new(120.0, 0.0, 14.0, 0.0)),
                NutritionSource::Estimated,
            ),
            entry("saffron", "a pinch", None, NutritionSource::Estimated),
        ];
        let totals = NutritionRecord::new(420.0, 34.0, 22.0, 15.0);
        let report = render_report(&entries, &totals, &HealthAssessment::healthy());

        assert!(report.starts_with("Here's the analysis of your meal:\n\n"));
        assert!(report.contains(
            "- olive oil (1 tbsp): 120 kcal, 0g protein, 14g fat, 0g carbs (estimated)"
        ));
        assert!(report.contains("- saffron (a pinch): no nutrition data available"));
        assert!(report.contains(
            "**Total Macronutrients**:\n- Calories: 420 kcal\n- Protein: 34g\n- Fat: 22g\n- Carbs: 15g\n"
        ));
    }
}
