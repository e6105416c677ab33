use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NutriError, Result};

/// A tracked nutrient with its target intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(rename = "Indicator")]
    pub name: String,

    /// Target intake. Always > 0 for a loaded catalog.
    #[serde(rename = "Value")]
    pub reference: f64,

    /// Display-only unit label.
    #[serde(rename = "Unit", default)]
    pub unit: String,
}

impl Nutrient {
    pub fn new(name: impl Into<String>, reference: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference,
            unit: unit.into(),
        }
    }

    /// Non-empty name and strictly positive (finite) reference.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.reference.is_finite() && self.reference > 0.0
    }
}

/// Nutrient reference targets, in load order.
///
/// Built once and shared read-only; every engine call takes it by reference.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    nutrients: Vec<Nutrient>,
    index: HashMap<String, usize>,
}

impl ReferenceCatalog {
    /// Build from nutrients. A repeated name replaces the earlier entry in place.
    pub fn from_nutrients<I: IntoIterator<Item = Nutrient>>(nutrients: I) -> Self {
        let mut catalog = Self::default();
        for nutrient in nutrients {
            match catalog.index.get(&nutrient.name) {
                Some(&i) => catalog.nutrients[i] = nutrient,
                None => {
                    catalog
                        .index
                        .insert(nutrient.name.clone(), catalog.nutrients.len());
                    catalog.nutrients.push(nutrient);
                }
            }
        }
        catalog
    }

    /// Load from CSV with `Indicator`, `Value` and `Unit` columns.
    ///
    /// Rows with a non-positive reference are rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut nutrients = Vec::new();
        for row in rdr.deserialize() {
            let nutrient: Nutrient = row?;
            if !nutrient.is_valid() {
                return Err(NutriError::InvalidInput(format!(
                    "reference value for '{}' must be positive, got {}",
                    nutrient.name, nutrient.reference
                )));
            }
            nutrients.push(nutrient);
        }
        let catalog = Self::from_nutrients(nutrients);
        debug!(nutrients = catalog.len(), "loaded reference catalog");
        Ok(catalog)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn get(&self, name: &str) -> Option<&Nutrient> {
        self.index.get(name).map(|&i| &self.nutrients[i])
    }

    pub fn reference_value(&self, name: &str) -> Option<f64> {
        self.get(name).map(|n| n.reference)
    }

    pub fn unit(&self, name: &str) -> Option<&str> {
        self.get(name).map(|n| n.unit.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Nutrient names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nutrients.iter().map(|n| n.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nutrient> {
        self.nutrients.iter()
    }

    pub fn len(&self) -> usize {
        self.nutrients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nutrients.is_empty()
    }
}
