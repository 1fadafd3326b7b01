use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Priority tier of a screening.
///
/// Variant order is the sort order: `High < Medium < Low`, so sorting
/// ascending puts the most pressing screenings first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::High, Urgency::Medium, Urgency::Low];

    pub fn label(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }

    /// How a reader should act on a screening of this tier.
    pub fn guidance(self) -> &'static str {
        match self {
            Urgency::High => {
                "important screening for this age group; try to schedule it within weeks or months"
            }
            Urgency::Medium => "useful for prevention; plan it for your next check-up",
            Urgency::Low => {
                "depends on risk or a shared decision with your doctor; can be opportunistic"
            }
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown urgency tier: '{0}'. Expected 'high', 'medium' or 'low'.")]
pub struct ParseUrgencyError(pub String);

impl FromStr for Urgency {
    type Err = ParseUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Urgency::High),
            "medium" => Ok(Urgency::Medium),
            "low" => Ok(Urgency::Low),
            _ => Err(ParseUrgencyError(s.to_string())),
        }
    }
}
