use super::sex::ApplicableSex;
use super::urgency::Urgency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Oldest age, in years, the engine accepts and a rule bound may name.
pub const MAX_AGE: u32 = 120;

/// One recommended screening or exam, with the conditions under which it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScreeningRule {
    pub id: String,
    pub name: String,
    pub applicable_sex: ApplicableSex,
    /// Inclusive lower bound in years; `None` means no lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Inclusive upper bound in years; `None` means no upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    pub frequency_long: String,
    pub frequency_short: String,
    pub urgency: Urgency,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl ScreeningRule {
    /// The "indicated for" line: audience, then any age bounds.
    ///
    /// A bound of zero is still a bound and is rendered.
    pub fn audience(&self) -> String {
        let mut line = self.applicable_sex.audience().to_string();
        if let Some(min) = self.min_age {
            line.push_str(&format!(" · from {} years", min));
        }
        if let Some(max) = self.max_age {
            line.push_str(&format!(" · up to {} years", max));
        }
        line
    }
}
