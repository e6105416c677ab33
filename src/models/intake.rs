use serde::{Deserialize, Serialize};

/// A single measured or estimated nutrient intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub nutrient: String,
    pub intake: f64,
}

impl IntakeRecord {
    pub fn new(nutrient: impl Into<String>, intake: f64) -> Self {
        Self {
            nutrient: nutrient.into(),
            intake,
        }
    }
}

/// Ordered mapping of nutrient -> intake.
///
/// Iteration follows insertion order. Re-inserting a nutrient replaces its
/// value but keeps the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IntakeSet {
    records: Vec<IntakeRecord>,
}

impl IntakeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the intake for a nutrient.
    pub fn insert(&mut self, nutrient: impl Into<String>, intake: f64) {
        let nutrient = nutrient.into();
        match self.records.iter_mut().find(|r| r.nutrient == nutrient) {
            Some(existing) => existing.intake = intake,
            None => self.records.push(IntakeRecord { nutrient, intake }),
        }
    }

    pub fn get(&self, nutrient: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.nutrient == nutrient)
            .map(|r| r.intake)
    }

    pub fn contains(&self, nutrient: &str) -> bool {
        self.get(nutrient).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntakeRecord> {
        self.records.iter()
    }

    /// Nutrient names in insertion order.
    pub fn nutrients(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.nutrient.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for IntakeSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut set = IntakeSet::new();
        for (nutrient, intake) in iter {
            set.insert(nutrient, intake);
        }
        set
    }
}

impl FromIterator<IntakeRecord> for IntakeSet {
    fn from_iter<I: IntoIterator<Item = IntakeRecord>>(iter: I) -> Self {
        iter.into_iter().map(|r| (r.nutrient, r.intake)).collect()
    }
}

impl<'a> IntoIterator for &'a IntakeSet {
    type Item = &'a IntakeRecord;
    type IntoIter = std::slice::Iter<'a, IntakeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let set: IntakeSet = [("Zinc", 8.0), ("Energy", 2000.0), ("Calcium", 900.0)]
            .into_iter()
            .collect();

        let names: Vec<&str> = set.nutrients().collect();
        assert_eq!(names, vec!["Zinc", "Energy", "Calcium"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut set = IntakeSet::new();
        set.insert("Energy", 1800.0);
        set.insert("Protein", 40.0);
        set.insert("Energy", 2100.0);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Energy"), Some(2100.0));
        assert_eq!(set.nutrients().next(), Some("Energy"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut set = IntakeSet::new();
        set.insert("Iron", 12.0);
        assert!(set.contains("Iron"));
        assert!(!set.contains("iron"));
    }
}
