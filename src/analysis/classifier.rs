use crate::models::{Classification, Status};

/// Percentage of the reference value covered by `intake`.
///
/// Precondition: `reference > 0`.
#[inline]
pub fn percentage_of_reference(intake: f64, reference: f64) -> f64 {
    debug_assert!(reference > 0.0, "reference value must be positive");
    100.0 * intake / reference
}

/// Classify one intake against its reference value.
///
/// Precondition: `reference > 0`. Pure; see [`Status::from_percentage`] for
/// the tier boundaries.
pub fn classify(intake: f64, reference: f64) -> Classification {
    let percentage = percentage_of_reference(intake, reference);
    let status = Status::from_percentage(percentage);
    Classification {
        percentage,
        status,
        color: status.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorTag;

    #[test]
    fn test_percentage() {
        assert_eq!(classify(45.0, 50.0).percentage, 90.0);
        assert_eq!(classify(0.0, 14.0).percentage, 0.0);
    }

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (200.0001, Status::Excess),
            (200.0, Status::High),
            (150.0001, Status::High),
            (150.0, Status::Adequate),
            (90.0, Status::Adequate),
            (89.9999, Status::Borderline),
            (70.0, Status::Borderline),
            (69.9999, Status::Deficient),
            (0.0, Status::Deficient),
        ];

        for (pct, expected) in cases {
            assert_eq!(Status::from_percentage(pct), expected, "pct={}", pct);
        }
    }

    #[test]
    fn test_classify_sets_color() {
        let c = classify(300.0, 100.0);
        assert_eq!(c.status, Status::Excess);
        assert_eq!(c.color, ColorTag::Purple);

        let c = classify(60.0, 100.0);
        assert_eq!(c.status, Status::Deficient);
        assert_eq!(c.color, ColorTag::Red);
    }
}
