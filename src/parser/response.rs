use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::catalog::NutrientSet;
use crate::error::{NutriError, Result};
use crate::models::IntakeSet;

/// Separator between `Nutrient: value` fields on the answer line.
pub const FIELD_SEPARATOR: char = ';';

/// Separator between a nutrient name and its value.
pub const NAME_VALUE_SEPARATOR: char = ':';

/// Optional digits, optional fraction, optional whitespace, then a unit made
/// of letters (e.g. `2000kcal`, `1.5 mg`, `900 μg`).
static VALUE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d*(?:\.\d+)?)\s*(\p{L}+)").ok());

/// Pick the line holding the structured answer: the first containing a colon.
///
/// Anything before it is treated as preamble.
pub fn find_answer_line(text: &str) -> Option<&str> {
    text.lines().find(|line| line.contains(NAME_VALUE_SEPARATOR))
}

/// Parse a value such as `"12,5 mg"` into a number.
///
/// Returns `None` when the text does not look like `<number><unit>`.
fn parse_value(pattern: &Regex, raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    let caps = pattern.captures(&normalized)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Extract nutrient estimates from a free-text model response.
///
/// Only the first line containing `:` is read; it is expected to hold
/// `Nutrient: value unit` fields separated by `;`.
///
/// * Fields without exactly one `:` are dropped.
/// * Fields naming a nutrient outside `valid` are dropped.
/// * Values that do not parse as `<number><unit>` are recorded as `0.0`, so a
///   garbled value stays distinguishable from a missing one.
/// * Text with no colon at all yields an empty set.
///
/// Fails with [`NutriError::ParseFailure`] only when the response cannot be
/// processed at all; no partial set is returned in that case.
pub fn parse_response<S>(text: &str, valid: &S) -> Result<IntakeSet>
where
    S: NutrientSet + ?Sized,
{
    parse_with_pattern(VALUE_PATTERN.as_ref(), text, valid)
}

fn parse_with_pattern<S>(pattern: Option<&Regex>, text: &str, valid: &S) -> Result<IntakeSet>
where
    S: NutrientSet + ?Sized,
{
    let pattern = pattern.ok_or_else(|| {
        warn!("value pattern failed to compile");
        NutriError::ParseFailure("value pattern unavailable".to_string())
    })?;

    let Some(line) = find_answer_line(text) else {
        debug!("no structured line in response");
        return Ok(IntakeSet::new());
    };

    let mut estimates = IntakeSet::new();
    for field in line.split(FIELD_SEPARATOR) {
        let parts: Vec<&str> = field.split(NAME_VALUE_SEPARATOR).collect();
        let [name, value] = parts.as_slice() else {
            trace!(field, "dropping malformed field");
            continue;
        };

        let name = name.trim();
        if !valid.contains_nutrient(name) {
            trace!(nutrient = name, "dropping unrecognized nutrient");
            continue;
        }

        let value = value.trim();
        let amount = parse_value(pattern, value).unwrap_or_else(|| {
            debug!(nutrient = name, value, "unparseable value, recording 0");
            0.0
        });
        estimates.insert(name, amount);
    }

    debug!(estimates = estimates.len(), "parsed response");
    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &["Energy", "Protein", "Fat", "Vitamin B12"];

    #[test]
    fn test_known_fields_extracted() {
        let got = parse_response("Energy: 2000kcal;Protein: 50g;Unknown: 10x", VALID).unwrap();

        assert_eq!(got.len(), 2);
        assert_eq!(got.get("Energy"), Some(2000.0));
        assert_eq!(got.get("Protein"), Some(50.0));
        assert!(!got.contains("Unknown"));
    }

    #[test]
    fn test_garbled_value_recorded_as_zero() {
        let got = parse_response("Energy: abcunit;", VALID).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got.get("Energy"), Some(0.0));

        let got = parse_response("Protein: unknown", VALID).unwrap();
        assert_eq!(got.get("Protein"), Some(0.0));
    }

    #[test]
    fn test_no_colon_is_empty() {
        let got = parse_response("I cannot help with that request", VALID).unwrap();
        assert!(got.is_empty());
        assert!(parse_response("", VALID).unwrap().is_empty());
    }

    #[test]
    fn test_preamble_skipped_and_later_lines_ignored() {
        let text = "Here is my estimate\n\nEnergy: 1800 kcal; Fat: 65 g\nProtein: 90 g";
        let got = parse_response(text, VALID).unwrap();

        assert_eq!(got.get("Energy"), Some(1800.0));
        assert_eq!(got.get("Fat"), Some(65.0));
        assert!(!got.contains("Protein"));
    }

    #[test]
    fn test_comma_decimal_separator() {
        let got = parse_response("Vitamin B12: 2,4 μg; Fat: 12.5g", VALID).unwrap();
        assert_eq!(got.get("Vitamin B12"), Some(2.4));
        assert_eq!(got.get("Fat"), Some(12.5));
    }

    #[test]
    fn test_malformed_fields_dropped() {
        let got = parse_response("Energy: 10: 20 kcal; Protein 40g; Fat: 30 g", VALID).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got.get("Fat"), Some(30.0));
    }

    #[test]
    fn test_name_match_is_exact() {
        let got = parse_response("energy: 2000 kcal; PROTEIN: 50 g", VALID).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn test_number_without_unit_is_zero() {
        let got = parse_response("Protein: 50", VALID).unwrap();
        assert_eq!(got.get("Protein"), Some(0.0));
    }

    #[test]
    fn test_field_order_preserved() {
        let got = parse_response("Fat: 1 g; Energy: 2 kcal; Protein: 3 g", VALID).unwrap();
        let names: Vec<&str> = got.nutrients().collect();
        assert_eq!(names, vec!["Fat", "Energy", "Protein"]);
    }

    #[test]
    fn test_missing_pattern_fails_without_partial_result() {
        let err = parse_with_pattern(None, "Energy: 2000kcal; Fat: 60 g", VALID).unwrap_err();
        assert!(matches!(err, NutriError::ParseFailure(_)));
    }

    #[test]
    fn test_value_pattern_compiles() {
        assert!(VALUE_PATTERN.is_some());
    }

    #[test]
    fn test_find_answer_line() {
        assert_eq!(find_answer_line("a\nb: c\nd: e"), Some("b: c"));
        assert_eq!(find_answer_line("nothing here"), None);
    }
}
