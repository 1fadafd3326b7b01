use super::error::AgeError;
use crate::core::models::rule::MAX_AGE;
use serde::Serialize;
use std::fmt;

/// An age in whole years, guaranteed to lie in `0..=120`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    pub fn new(years: u32) -> Result<Self, AgeError> {
        if years > MAX_AGE {
            return Err(AgeError::OutOfRange {
                raw: years.to_string(),
            });
        }
        Ok(Self(years))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Age {
    type Error = AgeError;

    fn try_from(years: i64) -> Result<Self, Self::Error> {
        u32::try_from(years)
            .map_err(|_| AgeError::OutOfRange {
                raw: years.to_string(),
            })
            .and_then(Age::new)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turns free-form age text into an [`Age`].
///
/// Every character outside `0-9` is dropped before parsing, so `"4a2"` reads as 42
/// and `"-1"` reads as 1. Text with no digits at all, or digits too long to be a
/// number, is out of range rather than empty.
pub fn validate_age(raw: &str) -> Result<Age, AgeError> {
    if raw.is_empty() {
        return Err(AgeError::Empty);
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let out_of_range = || AgeError::OutOfRange {
        raw: raw.to_string(),
    };

    if digits.is_empty() {
        return Err(out_of_range());
    }
    let years: u32 = digits.parse().map_err(|_| out_of_range())?;
    Age::new(years).map_err(|_| out_of_range())
}
