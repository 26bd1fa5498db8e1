//! Period length value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Consecutive bleeding days at the start of each cycle, within 2..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PeriodLength(u32);

impl PeriodLength {
    /// Shortest accepted period.
    pub const MIN: u32 = 2;

    /// Longest accepted period.
    pub const MAX: u32 = 10;

    /// Typical period, used when onboarding starts.
    pub const DEFAULT: Self = Self(5);

    /// Creates a PeriodLength, returning error if out of range.
    pub fn try_new(days: i64) -> Result<Self, ValidationError> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&days) {
            return Err(ValidationError::out_of_range(
                "period_length",
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

impl Default for PeriodLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for PeriodLength {
    type Error = ValidationError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::try_new(days)
    }
}

impl From<PeriodLength> for u32 {
    fn from(length: PeriodLength) -> Self {
        length.0
    }
}

impl fmt::Display for PeriodLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}
