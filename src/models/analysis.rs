use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::constants::{
    ADEQUATE_MIN_PCT, BORDERLINE_MIN_PCT, EXCESS_ABOVE_PCT, HIGH_ABOVE_PCT,
};

/// Adequacy tier of a nutrient intake relative to its reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Deficient,
    Borderline,
    Adequate,
    High,
    Excess,
}

/// Severity color associated with each status tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Yellow,
    Green,
    Orange,
    Purple,
}

impl Status {
    /// Tier for a percentage-of-reference value.
    ///
    /// Evaluated top-down, first match wins:
    /// `> 200` Excess, `> 150` High, `>= 90` Adequate, `>= 70` Borderline,
    /// otherwise Deficient.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > EXCESS_ABOVE_PCT {
            Status::Excess
        } else if percentage > HIGH_ABOVE_PCT {
            Status::High
        } else if percentage >= ADEQUATE_MIN_PCT {
            Status::Adequate
        } else if percentage >= BORDERLINE_MIN_PCT {
            Status::Borderline
        } else {
            Status::Deficient
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            Status::Excess => ColorTag::Purple,
            Status::High => ColorTag::Orange,
            Status::Adequate => ColorTag::Green,
            Status::Borderline => ColorTag::Yellow,
            Status::Deficient => ColorTag::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Excess => "Excess",
            Status::High => "High",
            Status::Adequate => "Adequate",
            Status::Borderline => "Borderline",
            Status::Deficient => "Deficient",
        }
    }

    /// Whether the tier calls for a dietary adjustment.
    ///
    /// Borderline intakes are reported but not flagged.
    pub fn needs_adjustment(self) -> bool {
        matches!(self, Status::Deficient | Status::High | Status::Excess)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ColorTag {
    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
            ColorTag::Purple => "purple",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying one intake against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub percentage: f64,
    pub status: Status,
    pub color: ColorTag,
}

/// Per-nutrient analysis row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub nutrient: String,
    pub intake: f64,
    pub reference: f64,
    pub percentage: f64,
    pub status: Status,
    pub color: ColorTag,
}

impl AnalysisResult {
    /// Signed distance to the reference (positive means a deficit).
    pub fn difference(&self) -> f64 {
        self.reference - self.intake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_tiers() {
        assert_eq!(Status::Excess.color(), ColorTag::Purple);
        assert_eq!(Status::High.color(), ColorTag::Orange);
        assert_eq!(Status::Adequate.color(), ColorTag::Green);
        assert_eq!(Status::Borderline.color(), ColorTag::Yellow);
        assert_eq!(Status::Deficient.color(), ColorTag::Red);
    }

    #[test]
    fn test_needs_adjustment_skips_borderline() {
        assert!(Status::Deficient.needs_adjustment());
        assert!(Status::High.needs_adjustment());
        assert!(Status::Excess.needs_adjustment());
        assert!(!Status::Borderline.needs_adjustment());
        assert!(!Status::Adequate.needs_adjustment());
    }

    #[test]
    fn test_color_serializes_lowercase() {
        let json = serde_json::to_string(&ColorTag::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
    }
}
