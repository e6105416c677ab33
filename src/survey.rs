use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::catalog::ReferenceCatalog;
use crate::error::{NutriError, Result};
use crate::models::IntakeSet;

/// One row of a dietary survey export.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyRow {
    #[serde(rename = "Survey")]
    pub survey: String,

    #[serde(rename = "Geographic Level")]
    pub subpopulation: String,

    #[serde(rename = "Indicator")]
    pub indicator: String,

    /// Missing or non-numeric values are `None`.
    #[serde(rename = "Value", deserialize_with = "csv::invalid_option")]
    pub value: Option<f64>,
}

/// Survey name without its trailing qualifier (`"Spain - ENIDE 2011"` -> `"Spain"`).
pub fn clean_survey_name(name: &str) -> &str {
    name.split(" -").next().unwrap_or(name).trim()
}

/// Dietary survey data, one intake figure per (survey, subpopulation, indicator).
#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    rows: Vec<SurveyRow>,
}

impl SurveyTable {
    pub fn from_rows(rows: Vec<SurveyRow>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.survey = clean_survey_name(&row.survey).to_string();
                row
            })
            .collect();
        Self { rows }
    }

    /// Load from CSV with `Survey`, `Geographic Level`, `Indicator` and `Value`
    /// columns. Other columns are ignored.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let rows = rdr
            .deserialize()
            .collect::<std::result::Result<Vec<SurveyRow>, csv::Error>>()?;
        let table = Self::from_rows(rows);
        debug!(rows = table.rows.len(), "loaded survey table");
        Ok(table)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Distinct survey countries in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.survey.as_str()))
    }

    /// Distinct subpopulations of a country in first-seen order.
    pub fn subpopulations(&self, country: &str) -> Vec<&str> {
        distinct(
            self.rows
                .iter()
                .filter(|r| r.survey == country)
                .map(|r| r.subpopulation.as_str()),
        )
    }

    /// Intake profile for a country and subpopulation.
    ///
    /// Keeps rows with a value whose indicator the catalog tracks, in row order.
    /// Fails with [`NutriError::ProfileNotFound`] when nothing matches.
    pub fn profile(
        &self,
        country: &str,
        subpopulation: &str,
        catalog: &ReferenceCatalog,
    ) -> Result<IntakeSet> {
        let profile: IntakeSet = self
            .rows
            .iter()
            .filter(|r| r.survey == country && r.subpopulation == subpopulation)
            .filter(|r| catalog.contains(&r.indicator))
            .filter_map(|r| r.value.map(|v| (r.indicator.as_str(), v)))
            .collect();

        if profile.is_empty() {
            return Err(NutriError::ProfileNotFound {
                country: country.to_string(),
                subpopulation: subpopulation.to_string(),
            });
        }
        Ok(profile)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Nutrient;

    const CSV: &str = "\
Survey,Geographic Level,Indicator,Value,Unit
Spain - ENIDE 2011,National,Energy,2100,kcal
Spain - ENIDE 2011,National,Iron,,mg
Spain - ENIDE 2011,National,Caffeine,120,mg
Spain - ENIDE 2011,National,Protein,85.5,g
Spain - ENIDE 2011,Urban,Energy,2200,kcal
Italy - INRAN-SCAI,National,Energy,1950,kcal
Italy - INRAN-SCAI,National,Protein,NA,g
";

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::from_nutrients(vec![
            Nutrient::new("Energy", 2000.0, "kcal"),
            Nutrient::new("Protein", 50.0, "g"),
            Nutrient::new("Iron", 14.0, "mg"),
        ])
    }

    #[test]
    fn test_clean_survey_name() {
        assert_eq!(clean_survey_name("Spain - ENIDE 2011"), "Spain");
        assert_eq!(clean_survey_name("Kenya"), "Kenya");
    }

    #[test]
    fn test_countries_and_subpopulations() {
        let table = SurveyTable::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.countries(), vec!["Spain", "Italy"]);
        assert_eq!(table.subpopulations("Spain"), vec!["National", "Urban"]);
        assert!(table.subpopulations("France").is_empty());
    }

    #[test]
    fn test_profile_filters_missing_and_untracked() {
        let table = SurveyTable::from_csv_reader(CSV.as_bytes()).unwrap();
        let profile = table.profile("Spain", "National", &catalog()).unwrap();

        let names: Vec<&str> = profile.nutrients().collect();
        assert_eq!(names, vec!["Energy", "Protein"]);
        assert_eq!(profile.get("Protein"), Some(85.5));
    }

    #[test]
    fn test_non_numeric_value_skipped() {
        let table = SurveyTable::from_csv_reader(CSV.as_bytes()).unwrap();
        let profile = table.profile("Italy", "National", &catalog()).unwrap();
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn test_unknown_profile() {
        let table = SurveyTable::from_csv_reader(CSV.as_bytes()).unwrap();
        let err = table.profile("France", "National", &catalog()).unwrap_err();
        assert!(matches!(err, NutriError::ProfileNotFound { .. }));
    }
}
