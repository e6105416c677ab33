pub mod builtin;
pub mod food_source;
pub mod reference;

use std::collections::{BTreeSet, HashSet};

pub use food_source::{FoodSource, FoodSourceCatalog, FoodSourceEntry};
pub use reference::{Nutrient, ReferenceCatalog};

/// A set of recognized nutrient identifiers (exact, case-sensitive).
pub trait NutrientSet {
    fn contains_nutrient(&self, name: &str) -> bool;
}

impl NutrientSet for ReferenceCatalog {
    fn contains_nutrient(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl NutrientSet for HashSet<String> {
    fn contains_nutrient(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl NutrientSet for BTreeSet<String> {
    fn contains_nutrient(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl NutrientSet for [&str] {
    fn contains_nutrient(&self, name: &str) -> bool {
        self.iter().any(|n| *n == name)
    }
}

impl NutrientSet for [String] {
    fn contains_nutrient(&self, name: &str) -> bool {
        self.iter().any(|n| n == name)
    }
}
