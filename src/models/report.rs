use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, plan_adjustments, NutrientAdjustment};
use crate::catalog::{FoodSourceCatalog, ReferenceCatalog};
use crate::models::{AnalysisResult, IntakeSet};

/// Full outcome of one analysis run, as written by `save_report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub results: Vec<AnalysisResult>,
    pub adjustments: Vec<NutrientAdjustment>,
}

impl AnalysisReport {
    pub fn new(results: Vec<AnalysisResult>, adjustments: Vec<NutrientAdjustment>) -> Self {
        Self {
            results,
            adjustments,
        }
    }

    /// Analyze `intakes` and plan adjustments for every flagged nutrient.
    pub fn build(
        intakes: &IntakeSet,
        reference: &ReferenceCatalog,
        sources: &FoodSourceCatalog,
    ) -> Self {
        let results = analyze(intakes, reference);
        let adjustments = plan_adjustments(&results, sources);
        Self::new(results, adjustments)
    }

    /// True when no nutrient needs adjusting.
    pub fn is_balanced(&self) -> bool {
        self.adjustments.is_empty()
    }
}
