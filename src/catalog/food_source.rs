use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::builtin::BUILTIN_FOOD_SOURCES;
use crate::error::{NutriError, Result};

/// One row of the food-source table: how much of a nutrient a food supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSourceEntry {
    #[serde(rename = "Nutrient")]
    pub nutrient: String,

    #[serde(rename = "Food")]
    pub food: String,

    /// Nutrient content per 100 units of the food. Must be > 0.
    #[serde(rename = "Content")]
    pub content_per_100: f64,

    #[serde(rename = "Unit")]
    pub unit: String,
}

impl FoodSourceEntry {
    pub fn new(
        nutrient: impl Into<String>,
        food: impl Into<String>,
        content_per_100: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            nutrient: nutrient.into(),
            food: food.into(),
            content_per_100,
            unit: unit.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.food.trim().is_empty()
            && self.content_per_100.is_finite()
            && self.content_per_100 > 0.0
    }
}

/// A food supplying a given nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    pub food: String,
    pub content_per_100: f64,
    pub unit: String,
}

/// Nutrient -> foods that supply it.
///
/// Food names are unique within a nutrient (a later entry replaces an earlier
/// one) but may repeat across nutrients.
#[derive(Debug, Clone, Default)]
pub struct FoodSourceCatalog {
    sources: HashMap<String, Vec<FoodSource>>,
}

impl FoodSourceCatalog {
    pub fn from_entries<I: IntoIterator<Item = FoodSourceEntry>>(entries: I) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// The default table bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_FOOD_SOURCES
                .iter()
                .map(|&(nutrient, food, content, unit)| {
                    FoodSourceEntry::new(nutrient, food, content, unit)
                }),
        )
    }

    /// Load from CSV with `Nutrient`, `Food`, `Content` and `Unit` columns.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut entries = Vec::new();
        for row in rdr.deserialize() {
            let entry: FoodSourceEntry = row?;
            if !entry.is_valid() {
                return Err(NutriError::InvalidInput(format!(
                    "content of '{}' for '{}' must be positive, got {}",
                    entry.food, entry.nutrient, entry.content_per_100
                )));
            }
            entries.push(entry);
        }
        let catalog = Self::from_entries(entries);
        debug!(
            nutrients = catalog.sources.len(),
            entries = catalog.len(),
            "loaded food-source catalog"
        );
        Ok(catalog)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    fn insert(&mut self, entry: FoodSourceEntry) {
        let foods = self.sources.entry(entry.nutrient).or_default();
        let source = FoodSource {
            food: entry.food,
            content_per_100: entry.content_per_100,
            unit: entry.unit,
        };
        match foods.iter_mut().find(|f| f.food == source.food) {
            Some(existing) => *existing = source,
            None => foods.push(source),
        }
    }

    /// Foods for a nutrient; empty when the nutrient is not covered.
    pub fn sources_for(&self, nutrient: &str) -> &[FoodSource] {
        self.sources
            .get(nutrient)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, nutrient: &str) -> bool {
        self.sources.contains_key(nutrient)
    }

    pub fn nutrients(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Total number of (nutrient, food) entries.
    pub fn len(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_core_nutrients() {
        let catalog = FoodSourceCatalog::builtin();

        for nutrient in ["Energy", "Protein", "Iron", "Calcium", "Vitamin B12"] {
            assert_eq!(catalog.sources_for(nutrient).len(), 5, "{}", nutrient);
        }
        assert!(catalog.sources_for("Sodium").is_empty());
    }

    #[test]
    fn test_same_food_across_nutrients() {
        let catalog = FoodSourceCatalog::builtin();
        let in_fat = catalog
            .sources_for("Fat")
            .iter()
            .any(|f| f.food == "Almonds");
        let in_protein = catalog
            .sources_for("Protein")
            .iter()
            .any(|f| f.food == "Almonds");
        assert!(in_fat && in_protein);
    }

    #[test]
    fn test_later_entry_replaces_food() {
        let catalog = FoodSourceCatalog::from_entries(vec![
            FoodSourceEntry::new("Iron", "Spinach", 2.7, "mg/100g"),
            FoodSourceEntry::new("Iron", "Lentils", 3.3, "mg/100g"),
            FoodSourceEntry::new("Iron", "Spinach", 3.6, "mg/100g"),
        ]);

        let foods = catalog.sources_for("Iron");
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].food, "Spinach");
        assert_eq!(foods[0].content_per_100, 3.6);
    }

    #[test]
    fn test_load_csv() {
        let csv = "Nutrient,Food,Content,Unit\nZinc,Oysters (cooked),78.6,mg/100g\nZinc,Beef (cooked),6.3,mg/100g\n";
        let catalog = FoodSourceCatalog::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.sources_for("Zinc")[1].food, "Beef (cooked)");
    }

    #[test]
    fn test_load_csv_rejects_zero_content() {
        let csv = "Nutrient,Food,Content,Unit\nZinc,Water,0,mg/100g\n";
        assert!(FoodSourceCatalog::from_csv_reader(csv.as_bytes()).is_err());
    }
}
