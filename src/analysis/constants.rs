// ─────────────────────────────────────────────────────────────────────────────
// Classification tiers (percentage of reference value)
// ─────────────────────────────────────────────────────────────────────────────

/// Above this percentage an intake is Excess (strict).
pub const EXCESS_ABOVE_PCT: f64 = 200.0;

/// Above this percentage an intake is High (strict).
pub const HIGH_ABOVE_PCT: f64 = 150.0;

/// At or above this percentage an intake is Adequate.
pub const ADEQUATE_MIN_PCT: f64 = 90.0;

/// At or above this percentage an intake is Borderline.
pub const BORDERLINE_MIN_PCT: f64 = 70.0;

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation policy
// ─────────────────────────────────────────────────────────────────────────────

/// Deviations within this fraction of the reference are not actionable.
///
/// Independent of the classification tiers above.
pub const RECOMMENDATION_TOLERANCE: f64 = 0.1;

/// Food content figures are expressed per this many units of food.
pub const CONTENT_BASIS_UNITS: f64 = 100.0;
