use crate::catalog::ReferenceCatalog;
use crate::models::AnalysisResult;

/// Instructions for estimating a diet's nutrient content from a description.
///
/// Lists the catalog nutrients in load order and asks for a single line of
/// `Nutrient name: value;` fields, the format `parse_response` reads.
pub fn estimation_system_prompt(catalog: &ReferenceCatalog) -> String {
    let nutrients: Vec<&str> = catalog.names().collect();
    format!(
        "You are given a list of food items or meals and you need to estimate the total \
         nutrient content of the diet. The nutrients that you have to consider are: {}.\n\
         Write the estimated amount of each nutrient separated by semicolons, with the format \
         \"Nutrient name: value;\". Answer always in English, use the nutrient names exactly as \
         they are in the list above.\n\
         Only provide estimates for the nutrients listed above.\n\
         You are brief. You do not comment on the results.\n\
         If you don't know the nutrient content of a food item or meal, you say 'unknown'.\n\
         If you don't recognize a food item, you can ask for clarification or you can make an \
         estimation based on the context.",
        nutrients.join(", ")
    )
}

/// Instructions for the meal planner role.
pub const MEAL_PLAN_SYSTEM_PROMPT: &str = "You are a nutritionist and meal planner. \
Given a detailed analysis of a person's nutrient intake, you will create a meal plan for a week with 3 meals per day. \
Focus on addressing any nutrient deficiencies and maintaining a balanced diet. \
Provide a brief explanation for each day's meals and how they address the nutritional needs.";

/// One line per analysed nutrient: `"{nutrient}: Intake x, Reference y, Status s"`.
pub fn format_analysis_summary(results: &[AnalysisResult]) -> String {
    results
        .iter()
        .map(|r| {
            format!(
                "{}: Intake {:.2}, Reference {:.2}, Status {}",
                r.nutrient, r.intake, r.reference, r.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Request for a weekly meal plan addressing the given analysis.
pub fn meal_plan_prompt(results: &[AnalysisResult], country: &str) -> String {
    format!(
        "Based on this nutrient analysis:\n\n{}\n\nCreate a meal plan for a week with 3 meals per \
         day for someone living in {}. Consider local cuisine and available ingredients.",
        format_analysis_summary(results),
        country
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::catalog::Nutrient;
    use crate::models::IntakeSet;

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::from_nutrients(vec![
            Nutrient::new("Energy", 2000.0, "kcal"),
            Nutrient::new("Protein", 50.0, "g"),
        ])
    }

    #[test]
    fn test_estimation_prompt_lists_nutrients_in_order() {
        let prompt = estimation_system_prompt(&catalog());
        assert!(prompt.contains("consider are: Energy, Protein."));
        assert!(prompt.contains("\"Nutrient name: value;\""));
    }

    #[test]
    fn test_meal_plan_prompt() {
        let intakes: IntakeSet = [("Protein", 20.0), ("Energy", 2100.0)].into_iter().collect();
        let results = analyze(&intakes, &catalog());
        let prompt = meal_plan_prompt(&results, "Spain");

        assert!(prompt.contains(
            "Protein: Intake 20.00, Reference 50.00, Status Deficient\n\
             Energy: Intake 2100.00, Reference 2000.00, Status Adequate"
        ));
        assert!(prompt.contains("someone living in Spain."));
    }
}
