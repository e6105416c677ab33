use tracing::debug;

use crate::analysis::classifier::classify;
use crate::catalog::ReferenceCatalog;
use crate::models::{AnalysisResult, IntakeSet};

/// Classify every intake that has a reference value.
///
/// Output follows the iteration order of `intakes`. Nutrients unknown to the
/// catalog are skipped; catalog nutrients without an intake produce nothing
/// (absence is "no claim", not zero).
pub fn analyze(intakes: &IntakeSet, catalog: &ReferenceCatalog) -> Vec<AnalysisResult> {
    let results: Vec<AnalysisResult> = intakes
        .iter()
        .filter_map(|record| {
            let reference = catalog.reference_value(&record.nutrient)?;
            let c = classify(record.intake, reference);
            Some(AnalysisResult {
                nutrient: record.nutrient.clone(),
                intake: record.intake,
                reference,
                percentage: c.percentage,
                status: c.status,
                color: c.color,
            })
        })
        .collect();

    debug!(
        intakes = intakes.len(),
        results = results.len(),
        "analysis complete"
    );
    results
}
