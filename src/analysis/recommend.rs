use tracing::debug;

use crate::analysis::constants::{CONTENT_BASIS_UNITS, RECOMMENDATION_TOLERANCE};
use crate::catalog::FoodSourceCatalog;
use crate::models::{Action, Recommendation, RecommendationSet};

/// Round to one decimal place, ties to even.
#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Whether a deviation from the reference is large enough to act on.
///
/// Deviations with `|reference - intake| <= 10% of reference` are tolerated.
pub fn is_actionable(current_intake: f64, reference: f64) -> bool {
    (reference - current_intake).abs() > reference * RECOMMENDATION_TOLERANCE
}

/// Food amounts that would bring `current_intake` back to `reference`.
///
/// Returns an empty set when the deviation is within tolerance or the catalog
/// has no foods for the nutrient. Otherwise yields one recommendation per
/// catalog food, with `amount = |reference - intake| / content * 100` grams.
///
/// Preconditions: `reference > 0` and every catalog content is `> 0`. There is
/// no upper bound on the resulting amount; low-content foods can produce very
/// large gram figures.
pub fn recommend(
    nutrient: &str,
    current_intake: f64,
    reference: f64,
    catalog: &FoodSourceCatalog,
) -> RecommendationSet {
    if !is_actionable(current_intake, reference) {
        return RecommendationSet::empty(nutrient);
    }

    let difference = reference - current_intake;
    let action = if difference > 0.0 {
        Action::Increase
    } else {
        Action::Reduce
    };

    let items: Vec<Recommendation> = catalog
        .sources_for(nutrient)
        .iter()
        .map(|source| Recommendation {
            food: source.food.clone(),
            amount_grams: round1(difference.abs() / source.content_per_100 * CONTENT_BASIS_UNITS),
            unit: source.unit.clone(),
            content_per_100: source.content_per_100,
            action,
        })
        .collect();

    debug!(nutrient, %action, foods = items.len(), "computed recommendations");
    RecommendationSet::new(nutrient, items)
}
