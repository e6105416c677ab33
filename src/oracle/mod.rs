//! Glue between the text-generation oracle and the engine.
//!
//! The oracle itself (an LLM call) lives outside this crate; here we build the
//! prompts it is given and turn its replies into intakes.

pub mod prompts;

use tracing::warn;

use crate::catalog::ReferenceCatalog;
use crate::error::{NutriError, Result};
use crate::models::IntakeSet;
use crate::parser::parse_response;

pub use prompts::{
    estimation_system_prompt, format_analysis_summary, meal_plan_prompt, MEAL_PLAN_SYSTEM_PROMPT,
};

/// Parse an oracle reply into intakes, treating an empty parse as failure.
///
/// Nothing is retried here; re-querying the oracle is the caller's call.
pub fn estimate_intakes(response: &str, catalog: &ReferenceCatalog) -> Result<IntakeSet> {
    let intakes = parse_response(response, catalog)?;
    if intakes.is_empty() {
        warn!("oracle response contained no usable estimates");
        return Err(NutriError::NoEstimates);
    }
    Ok(intakes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Nutrient;

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::from_nutrients(vec![
            Nutrient::new("Energy", 2000.0, "kcal"),
            Nutrient::new("Iron", 14.0, "mg"),
        ])
    }

    #[test]
    fn test_estimate_intakes() {
        let intakes = estimate_intakes("Energy: 2,100 kcal; Iron: 9 mg", &catalog()).unwrap();
        // The comma is read as a decimal separator.
        assert_eq!(intakes.get("Energy"), Some(2.1));
        assert_eq!(intakes.get("Iron"), Some(9.0));
    }

    #[test]
    fn test_refusal_is_no_estimates() {
        let err = estimate_intakes("Sorry, I can't do that.", &catalog()).unwrap_err();
        assert!(matches!(err, NutriError::NoEstimates));
    }

    #[test]
    fn test_only_unknown_nutrients_is_no_estimates() {
        let err = estimate_intakes("Caffeine: 200 mg", &catalog()).unwrap_err();
        assert!(matches!(err, NutriError::NoEstimates));
    }
}
