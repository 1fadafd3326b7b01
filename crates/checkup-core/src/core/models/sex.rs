use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Biological sex of the person a recommendation is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    Female,
    Male,
}

/// Which people a screening rule is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicableSex {
    All,
    Female,
    Male,
}

impl ApplicableSex {
    pub fn includes(self, sex: Sex) -> bool {
        match self {
            ApplicableSex::All => true,
            ApplicableSex::Female => sex == Sex::Female,
            ApplicableSex::Male => sex == Sex::Male,
        }
    }

    pub fn audience(self) -> &'static str {
        match self {
            ApplicableSex::All => "Everyone",
            ApplicableSex::Female => "Women",
            ApplicableSex::Male => "Men",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => f.write_str("female"),
            Sex::Male => f.write_str("male"),
        }
    }
}

impl fmt::Display for ApplicableSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicableSex::All => f.write_str("all"),
            ApplicableSex::Female => f.write_str("female"),
            ApplicableSex::Male => f.write_str("male"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sex: '{0}'. Expected 'female' (f) or 'male' (m).")]
pub struct ParseSexError(pub String);

static SEX_ALIASES: Map<&'static str, Sex> = phf_map! {
    "f" => Sex::Female,
    "female" => Sex::Female,
    "woman" => Sex::Female,
    "m" => Sex::Male,
    "male" => Sex::Male,
    "man" => Sex::Male,
};

impl FromStr for Sex {
    type Err = ParseSexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SEX_ALIASES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseSexError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_includes_both_sexes() {
        assert!(ApplicableSex::All.includes(Sex::Female));
        assert!(ApplicableSex::All.includes(Sex::Male));
    }

    #[test]
    fn sex_restricted_rules_include_only_their_sex() {
        assert!(ApplicableSex::Female.includes(Sex::Female));
        assert!(!ApplicableSex::Female.includes(Sex::Male));
        assert!(ApplicableSex::Male.includes(Sex::Male));
        assert!(!ApplicableSex::Male.includes(Sex::Female));
    }

    #[test]
    fn parse_accepts_short_and_long_forms() {
        for input in ["f", "F", "female", "Woman"] {
            assert_eq!(input.parse::<Sex>(), Ok(Sex::Female), "input {input:?}");
        }
        for input in ["m", "M", "male", " man "] {
            assert_eq!(input.parse::<Sex>(), Ok(Sex::Male), "input {input:?}");
        }
    }

    #[test]
    fn parse_rejects_unknown_text() {
        assert_eq!(
            "x".parse::<Sex>(),
            Err(ParseSexError("x".to_string()))
        );
        assert!("".parse::<Sex>().is_err());
    }
}
