use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{AnalysisReport, IntakeRecord, IntakeSet};

/// Load intakes from a JSON array of `{"nutrient": .., "intake": ..}` records.
///
/// Order follows the file; a repeated nutrient keeps its first position and
/// its last value.
pub fn load_intakes<P: AsRef<Path>>(path: P) -> Result<IntakeSet> {
    let content = fs::read_to_string(path)?;
    let records: Vec<IntakeRecord> = serde_json::from_str(&content)?;
    let intakes: IntakeSet = records.into_iter().collect();
    debug!(intakes = intakes.len(), "loaded intakes");
    Ok(intakes)
}

/// Save intakes as a JSON array of records.
pub fn save_intakes<P: AsRef<Path>>(path: P, intakes: &IntakeSet) -> Result<()> {
    let json = serde_json::to_string_pretty(intakes)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save an analysis report as pretty JSON.
pub fn save_report<P: AsRef<Path>>(path: P, report: &AnalysisReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_report<P: AsRef<Path>>(path: P) -> Result<AnalysisReport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_intakes() {
        let json = r#"[
            {"nutrient": "Zinc", "intake": 7.5},
            {"nutrient": "Energy", "intake": 1900},
            {"nutrient": "Zinc", "intake": 9.0}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let intakes = load_intakes(file.path()).unwrap();
        assert_eq!(intakes.len(), 2);
        assert_eq!(intakes.nutrients().next(), Some("Zinc"));
        assert_eq!(intakes.get("Zinc"), Some(9.0));

        let out_file = NamedTempFile::new().unwrap();
        save_intakes(out_file.path(), &intakes).unwrap();

        let reloaded = load_intakes(out_file.path()).unwrap();
        assert_eq!(reloaded, intakes);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"Energy\": 2000}").unwrap();
        assert!(load_intakes(file.path()).is_err());
    }
}
