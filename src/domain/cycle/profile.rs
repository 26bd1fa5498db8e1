//! Cycle profile - the user's reference period and average lengths.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    format_calendar_date, parse_calendar_date, CycleLength, PeriodLength, ValidationError,
};

/// A validated cycle profile.
///
/// Created once when onboarding completes and never mutated afterwards; a
/// reset discards it and a new one is created.
///
/// # Invariants
///
/// - `cycle_length` is within 20..=40 days
/// - `period_length` is within 2..=10 days
/// - `period_length < cycle_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct CycleProfile {
    last_period_start: NaiveDate,
    cycle_length: CycleLength,
    period_length: PeriodLength,
}

impl CycleProfile {
    /// Creates a profile from raw day counts, validating every bound.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound: cycle length range, period length
    /// range, then the period-shorter-than-cycle rule.
    pub fn new(
        last_period_start: NaiveDate,
        cycle_length: i64,
        period_length: i64,
    ) -> Result<Self, ValidationError> {
        let cycle_length = CycleLength::try_new(cycle_length)?;
        let period_length = PeriodLength::try_new(period_length)?;
        Self::from_parts(last_period_start, cycle_length, period_length)
    }

    /// Creates a profile from already validated lengths.
    ///
    /// # Errors
    ///
    /// `PeriodNotShorterThanCycle` when `period_length >= cycle_length`. The
    /// current value-object ranges (2..=10 and 20..=40) never overlap, so
    /// this only fails if those ranges are widened.
    pub fn from_parts(
        last_period_start: NaiveDate,
        cycle_length: CycleLength,
        period_length: PeriodLength,
    ) -> Result<Self, ValidationError> {
        if period_length.days() >= cycle_length.days() {
            return Err(ValidationError::PeriodNotShorterThanCycle {
                period_length: period_length.days(),
                cycle_length: cycle_length.days(),
            });
        }

        Ok(Self {
            last_period_start,
            cycle_length,
            period_length,
        })
    }

    /// Profile with the onboarding defaults (28-day cycle, 5-day period).
    pub fn with_defaults(last_period_start: NaiveDate) -> Self {
        Self {
            last_period_start,
            cycle_length: CycleLength::DEFAULT,
            period_length: PeriodLength::DEFAULT,
        }
    }

    pub fn last_period_start(&self) -> NaiveDate {
        self.last_period_start
    }

    pub fn cycle_length(&self) -> CycleLength {
        self.cycle_length
    }

    pub fn period_length(&self) -> PeriodLength {
        self.period_length
    }

    /// Cycle length in days as a signed integer for date arithmetic.
    pub(crate) fn cycle_days(&self) -> i64 {
        i64::from(self.cycle_length.days())
    }

    /// Period length in days as a signed integer for date arithmetic.
    pub(crate) fn period_days(&self) -> i64 {
        i64::from(self.period_length.days())
    }
}

/// Persisted form of a [`CycleProfile`].
///
/// Matches the record kept in the external key-value store:
/// `{"lastPeriodStart": "2024-01-01", "cycleLength": 28, "periodLength": 5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub last_period_start: String,
    pub cycle_length: i64,
    pub period_length: i64,
}

impl From<CycleProfile> for ProfileRecord {
    fn from(profile: CycleProfile) -> Self {
        Self {
            last_period_start: format_calendar_date(profile.last_period_start),
            cycle_length: i64::from(profile.cycle_length.days()),
            period_length: i64::from(profile.period_length.days()),
        }
    }
}

impl TryFrom<ProfileRecord> for CycleProfile {
    type Error = ValidationError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let start = parse_calendar_date("last_period_start", &record.last_period_start)?;
        CycleProfile::new(start, record.cycle_length, record.period_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn new_accepts_valid_profile() {
        let profile = CycleProfile::new(jan_first(), 28, 5).unwrap();
        assert_eq!(profile.last_period_start(), jan_first());
        assert_eq!(profile.cycle_length().days(), 28);
        assert_eq!(profile.period_length().days(), 5);
    }

    #[test]
    fn new_rejects_cycle_out_of_bounds() {
        let err = CycleProfile::new(jan_first(), 45, 5).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("cycle_length", 20, 40, 45));
    }

    #[test]
    fn new_rejects_period_out_of_bounds() {
        let err = CycleProfile::new(jan_first(), 28, 12).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("period_length", 2, 10, 12));
    }

    #[test]
    fn extreme_valid_lengths_are_accepted() {
        assert!(CycleProfile::new(jan_first(), 20, 10).is_ok());
        assert!(CycleProfile::new(jan_first(), 40, 2).is_ok());
    }

    #[test]
    fn from_parts_accepts_every_pair_of_valid_lengths() {
        for cycle in CycleLength::MIN..=CycleLength::MAX {
            for period in PeriodLength::MIN..=PeriodLength::MAX {
                let profile = CycleProfile::from_parts(
                    jan_first(),
                    CycleLength::try_new(i64::from(cycle)).unwrap(),
                    PeriodLength::try_new(i64::from(period)).unwrap(),
                )
                .unwrap();
                assert!(profile.period_days() < profile.cycle_days());
            }
        }
    }

    #[test]
    fn with_defaults_uses_onboarding_values() {
        let profile = CycleProfile::with_defaults(jan_first());
        assert_eq!(profile.cycle_length().days(), 28);
        assert_eq!(profile.period_length().days(), 5);
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let profile = CycleProfile::new(jan_first(), 30, 4).unwrap();
        let json = serde_json::to_value(ProfileRecord::from(profile)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "lastPeriodStart": "2024-01-01",
                "cycleLength": 30,
                "periodLength": 4
            })
        );
    }

    #[test]
    fn profile_serializes_through_record() {
        let profile = CycleProfile::new(jan_first(), 28, 5).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"lastPeriodStart\":\"2024-01-01\""));

        let back: CycleProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn legacy_timestamp_record_is_accepted() {
        let json = r#"{"lastPeriodStart":"2024-01-01T00:00:00.000Z","cycleLength":28,"periodLength":5}"#;
        let profile: CycleProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.last_period_start(), jan_first());
    }

    #[test]
    fn invalid_record_fails_to_decode() {
        let json = r#"{"lastPeriodStart":"2024-01-01","cycleLength":28,"periodLength":1}"#;
        assert!(serde_json::from_str::<CycleProfile>(json).is_err());

        let record = ProfileRecord {
            last_period_start: "yesterday".to_string(),
            cycle_length: 28,
            period_length: 5,
        };
        let err = CycleProfile::try_from(record).unwrap_err();
        assert_eq!(err.field(), "last_period_start");
    }
}
