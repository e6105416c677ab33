use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a corrective food change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Increase,
    Reduce,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Increase => "increase",
            Action::Reduce => "reduce",
        }
    }

    /// Capitalized form used in tables.
    pub fn title(self) -> &'static str {
        match self {
            Action::Increase => "Increase",
            Action::Reduce => "Reduce",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested amount of one food to add or remove.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub food: String,

    /// Grams of the food, rounded to one decimal.
    pub amount_grams: f64,

    /// Unit label of `content_per_100`, e.g. "mg/100g".
    pub unit: String,

    pub content_per_100: f64,

    pub action: Action,
}

/// Recommendations for a single nutrient, keyed by food name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub nutrient: String,
    items: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn empty(nutrient: impl Into<String>) -> Self {
        Self {
            nutrient: nutrient.into(),
            items: Vec::new(),
        }
    }

    pub fn new(nutrient: impl Into<String>, items: Vec<Recommendation>) -> Self {
        Self {
            nutrient: nutrient.into(),
            items,
        }
    }

    pub fn get(&self, food: &str) -> Option<&Recommendation> {
        self.items.iter().find(|r| r.food == food)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
