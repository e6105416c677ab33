use serde::{Deserialize, Serialize};

use crate::analysis::recommend::recommend;
use crate::catalog::FoodSourceCatalog;
use crate::models::{Action, AnalysisResult, RecommendationSet, Status};

/// A flagged nutrient together with the food changes that would correct it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAdjustment {
    pub result: AnalysisResult,

    /// Reduce for High/Excess, increase for Deficient.
    pub action: Action,

    /// Absolute distance from the reference value.
    pub gap: f64,

    pub recommendations: RecommendationSet,
}

fn action_for(status: Status) -> Action {
    match status {
        Status::High | Status::Excess => Action::Reduce,
        _ => Action::Increase,
    }
}

/// Build adjustments for every result whose status needs one, in input order.
pub fn plan_adjustments(
    results: &[AnalysisResult],
    catalog: &FoodSourceCatalog,
) -> Vec<NutrientAdjustment> {
    results
        .iter()
        .filter(|r| r.status.needs_adjustment())
        .map(|r| NutrientAdjustment {
            result: r.clone(),
            action: action_for(r.status),
            gap: r.difference().abs(),
            recommendations: recommend(&r.nutrient, r.intake, r.reference, catalog),
        })
        .collect()
}

const VITAMIN_TIPS: &[&str] = &[
    "Consider taking supplements after consulting with a healthcare provider",
    "Try to incorporate these foods into your daily meals",
];

const IRON_TIPS: &[&str] = &[
    "Combine iron-rich foods with vitamin C sources to improve absorption",
    "Avoid consuming iron-rich foods with calcium-rich foods",
];

const CALCIUM_TIPS: &[&str] = &[
    "Spread calcium intake throughout the day for better absorption",
    "Ensure adequate vitamin D intake for optimal calcium absorption",
];

/// Practical advice shown alongside recommendations for some nutrients.
pub fn nutrient_tips(nutrient: &str) -> &'static [&'static str] {
    if nutrient.starts_with("Vitamin") {
        VITAMIN_TIPS
    } else if nutrient.starts_with("Iron") {
        IRON_TIPS
    } else if nutrient.starts_with("Calcium") {
        CALCIUM_TIPS
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::catalog::{Nutrient, ReferenceCatalog};
    use crate::models::IntakeSet;

    fn reference() -> ReferenceCatalog {
        ReferenceCatalog::from_nutrients(vec![
            Nutrient::new("Energy", 2000.0, "kcal"),
            Nutrient::new("Iron", 14.0, "mg"),
            Nutrient::new("Fat", 70.0, "g"),
            Nutrient::new("Calcium", 1000.0, "mg"),
        ])
    }

    #[test]
    fn test_only_flagged_statuses_are_planned() {
        let intakes: IntakeSet = [
            ("Energy", 2000.0), // Adequate
            ("Iron", 5.0),      // Deficient
            ("Fat", 150.0),     // Excess
            ("Calcium", 800.0), // Borderline
        ]
        .into_iter()
        .collect();

        let results = analyze(&intakes, &reference());
        let plan = plan_adjustments(&results, &FoodSourceCatalog::builtin());

        let names: Vec<&str> = plan.iter().map(|a| a.result.nutrient.as_str()).collect();
        assert_eq!(names, vec!["Iron", "Fat"]);

        assert_eq!(plan[0].action, Action::Increase);
        assert_eq!(plan[0].gap, 9.0);
        assert_eq!(plan[0].recommendations.len(), 5);

        assert_eq!(plan[1].action, Action::Reduce);
        assert_eq!(plan[1].gap, 80.0);
        assert!(plan[1]
            .recommendations
            .iter()
            .all(|r| r.action == Action::Reduce));
    }

    #[test]
    fn test_tips_by_prefix() {
        assert_eq!(nutrient_tips("Vitamin B12").len(), 2);
        assert_eq!(nutrient_tips("Iron"), IRON_TIPS);
        assert_eq!(nutrient_tips("Calcium"), CALCIUM_TIPS);
        assert!(nutrient_tips("Zinc").is_empty());
    }
}
