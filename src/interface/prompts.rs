use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::ReferenceCatalog;
use crate::error::{NutriError, Result};
use crate::models::IntakeSet;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered in a selection menu.
const MAX_FUZZY_CANDIDATES: usize = 5;

/// Outcome of matching typed text against a list of names.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceMatch<'a> {
    Exact(&'a str),
    Fuzzy(Vec<&'a str>),
    NoMatch,
}

/// Match `input` against `options`: exact (case-insensitive) first, then fuzzy
/// candidates sorted by similarity.
pub fn match_choice<'a>(options: &[&'a str], input: &str) -> ChoiceMatch<'a> {
    let input = input.trim().to_lowercase();

    if let Some(exact) = options.iter().find(|o| o.to_lowercase() == input) {
        return ChoiceMatch::Exact(*exact);
    }

    let mut candidates: Vec<(&str, f64)> = options
        .iter()
        .map(|o| (*o, jaro_winkler(&o.to_lowercase(), &input)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        ChoiceMatch::NoMatch
    } else {
        ChoiceMatch::Fuzzy(
            candidates
                .into_iter()
                .take(MAX_FUZZY_CANDIDATES)
                .map(|(o, _)| o)
                .collect(),
        )
    }
}

/// Resolve a name from `options`, asking the user when needed.
///
/// With `typed` set, the text is matched exactly or fuzzily (confirming a
/// single fuzzy hit, offering a menu for several). Without it, a menu of all
/// options is shown.
pub fn choose_option(what: &str, options: &[&str], typed: Option<&str>) -> Result<String> {
    if options.is_empty() {
        return Err(NutriError::InvalidInput(format!("no {} available", what)));
    }

    let Some(typed) = typed else {
        let selection = Select::new()
            .with_prompt(format!("Select a {}", what))
            .items(options)
            .default(0)
            .interact()?;
        return Ok(options[selection].to_string());
    };

    match match_choice(options, typed) {
        ChoiceMatch::Exact(name) => Ok(name.to_string()),
        ChoiceMatch::Fuzzy(candidates) if candidates.len() == 1 => {
            let name = candidates[0];
            if prompt_yes_no(&format!("Did you mean '{}'?", name), true)? {
                Ok(name.to_string())
            } else {
                Err(NutriError::InvalidInput(format!("unknown {} '{}'", what, typed)))
            }
        }
        ChoiceMatch::Fuzzy(candidates) => {
            let mut items: Vec<&str> = candidates.clone();
            items.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&items)
                .default(0)
                .interact()?;

            candidates
                .get(selection)
                .map(|name| name.to_string())
                .ok_or_else(|| NutriError::InvalidInput(format!("unknown {} '{}'", what, typed)))
        }
        ChoiceMatch::NoMatch => Err(NutriError::InvalidInput(format!(
            "no matching {} found for '{}'",
            what, typed
        ))),
    }
}

/// Parse typed text as an intake: a finite number, zero or more.
pub fn parse_intake(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() {
        return Err(NutriError::InvalidInput("Intake must be a finite number".to_string()));
    }
    if value < 0.0 {
        return Err(NutriError::InvalidInput("Intake must be >= 0".to_string()));
    }

    Ok(value)
}

/// Prompt for a non-negative intake value.
pub fn prompt_intake(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()?;

    parse_intake(&input)
}

fn intake_label(catalog: &ReferenceCatalog, nutrient: &str) -> String {
    match catalog.get(nutrient) {
        Some(n) => format!("{} ({}) [reference {}]", n.name, n.unit, n.reference),
        None => nutrient.to_string(),
    }
}

/// Manual channel: ask for every catalog nutrient, defaulting to 0.
pub fn prompt_manual_intakes(catalog: &ReferenceCatalog) -> Result<IntakeSet> {
    let mut intakes = IntakeSet::new();
    for name in catalog.names() {
        let value = prompt_intake(&intake_label(catalog, name), 0.0)?;
        intakes.insert(name, value);
    }
    Ok(intakes)
}

/// Let the user review and edit estimated or survey intakes before analysis.
pub fn prompt_adjust_intakes(intakes: &IntakeSet, catalog: &ReferenceCatalog) -> Result<IntakeSet> {
    let mut adjusted = IntakeSet::new();
    for record in intakes {
        let value = prompt_intake(&intake_label(catalog, &record.nutrient), record.intake)?;
        adjusted.insert(record.nutrient.as_str(), value);
    }
    Ok(adjusted)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES: &[&str] = &["Spain", "Italy", "Kenya", "Bangladesh"];

    #[test]
    fn test_exact_match_ignores_case() {
        assert_eq!(match_choice(COUNTRIES, " spain "), ChoiceMatch::Exact("Spain"));
    }

    #[test]
    fn test_fuzzy_match() {
        match match_choice(COUNTRIES, "Spian") {
            ChoiceMatch::Fuzzy(c) => assert_eq!(c[0], "Spain"),
            other => panic!("expected fuzzy match, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_intake() {
        assert_eq!(parse_intake(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_intake("0").unwrap(), 0.0);
        assert!(parse_intake("-1").is_err());
        assert!(parse_intake("abc").is_err());
    }

    #[test]
    fn test_parse_intake_rejects_non_finite() {
        for input in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert!(
                matches!(parse_intake(input), Err(NutriError::InvalidInput(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_choice(COUNTRIES, "zzzzqqq"), ChoiceMatch::NoMatch);
    }
}
