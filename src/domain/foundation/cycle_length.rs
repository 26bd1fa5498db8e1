//! Cycle length value object (days between successive period starts).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of days from one period start to the next, within 20..=40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct CycleLength(u32);

impl CycleLength {
    /// Shortest accepted cycle.
    pub const MIN: u32 = 20;

    /// Longest accepted cycle.
    pub const MAX: u32 = 40;

    /// Average cycle, used when onboarding starts.
    pub const DEFAULT: Self = Self(28);

    /// Creates a CycleLength, returning error if out of range.
    pub fn try_new(days: i64) -> Result<Self, ValidationError> {
        if days < i64::from(Self::MIN) || days > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "cycle_length",
                Self::MIN as i32,
                Self::MAX as i32,
                days.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            ));
        }
        Ok(Self(days as u32))
    }

    /// Returns the number of days.
    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for CycleLength {
    type Error = ValidationError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::try_new(days)
    }
}

impl From<CycleLength> for u32 {
    fn from(length: CycleLength) -> Self {
        length.0
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_length_accepts_bounds() {
        assert_eq!(CycleLength::try_new(20).unwrap().days(), 20);
        assert_eq!(CycleLength::try_new(28).unwrap().days(), 28);
        assert_eq!(CycleLength::try_new(40).unwrap().days(), 40);
    }

    #[test]
    fn cycle_length_rejects_too_short() {
        match CycleLength::try_new(19) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "cycle_length");
                assert_eq!(min, 20);
                assert_eq!(max, 40);
                assert_eq!(actual, 19);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn cycle_length_rejects_too_long_and_negative() {
        assert!(CycleLength::try_new(41).is_err());
        assert!(CycleLength::try_new(0).is_err());
        assert!(CycleLength::try_new(-28).is_err());
    }

    #[test]
    fn cycle_length_default_is_28() {
        assert_eq!(CycleLength::default().days(), 28);
    }

    #[test]
    fn cycle_length_serializes_as_number() {
        let json = serde_json::to_string(&CycleLength::try_new(30).unwrap()).unwrap();
        assert_eq!(json, "30");
    }

    #[test]
    fn cycle_length_deserialization_validates() {
        let ok: CycleLength = serde_json::from_str("35").unwrap();
        assert_eq!(ok.days(), 35);

        let err = serde_json::from_str::<CycleLength>("50");
        assert!(err.is_err());
    }

    #[test]
    fn cycle_length_displays_in_days() {
        assert_eq!(format!("{}", CycleLength::DEFAULT), "28 days");
    }
}
