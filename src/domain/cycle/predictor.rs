//! Cycle predictor - period prediction for a single date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CycleProfile;
use crate::domain::foundation::{days_between, shift_date, ValidationError};

/// Days before the next period start at which the forecast drops to medium.
pub const IMMINENT_WINDOW_DAYS: i64 = 7;

/// How much to trust a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Inside the period window, or well clear of the next one.
    High,
    /// The next period is due within a week.
    Medium,
    /// The date precedes the recorded period start.
    Low,
}

impl Confidence {
    /// Capitalized name shown next to a prediction.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

/// Prediction for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub will_have_period: bool,
    /// Days from the query date to the next period start.
    pub days_until_next_period: i64,
    /// Zero-based day within the active period; 0 when no period is active.
    pub days_into_current_period: i64,
    pub confidence: Confidence,
    /// Day within the current cycle, absent before the reference start.
    pub day_in_cycle: Option<i64>,
    pub days_since_reference_start: i64,
}

impl PredictionResult {
    /// True when the date precedes the recorded period start.
    pub fn is_before_reference(&self) -> bool {
        self.days_since_reference_start < 0
    }
}

/// Pure cycle arithmetic over a [`CycleProfile`].
pub struct CyclePredictor;

impl CyclePredictor {
    /// Day within the cycle for a signed offset from the reference start.
    ///
    /// Uses the euclidean remainder so the result is always in
    /// `[0, cycle_length)`, including for negative offsets.
    pub fn day_in_cycle(profile: &CycleProfile, delta: i64) -> i64 {
        delta.rem_euclid(profile.cycle_days())
    }

    /// Whether a day in the cycle falls in the period window `[0, period_length)`.
    pub fn is_period_day(profile: &CycleProfile, day_in_cycle: i64) -> bool {
        (0..profile.period_days()).contains(&day_in_cycle)
    }

    /// Predicts whether `date` falls in a period window.
    ///
    /// Dates before the reference start are never period days and carry
    /// [`Confidence::Low`]; their `days_until_next_period` counts down to the
    /// reference start.
    pub fn predict(profile: &CycleProfile, date: NaiveDate) -> PredictionResult {
        let delta = days_between(date, profile.last_period_start());

        if delta < 0 {
            return PredictionResult {
                will_have_period: false,
                days_until_next_period: -delta,
                days_into_current_period: 0,
                confidence: Confidence::Low,
                day_in_cycle: None,
                days_since_reference_start: delta,
            };
        }

        let day_in_cycle = Self::day_in_cycle(profile, delta);
        let days_until_next_period = profile.cycle_days() - day_in_cycle;

        if Self::is_period_day(profile, day_in_cycle) {
            return PredictionResult {
                will_have_period: true,
                days_until_next_period,
                days_into_current_period: day_in_cycle,
                confidence: Confidence::High,
                day_in_cycle: Some(day_in_cycle),
                days_since_reference_start: delta,
            };
        }

        let confidence = if days_until_next_period <= IMMINENT_WINDOW_DAYS {
            Confidence::Medium
        } else {
            Confidence::High
        };

        PredictionResult {
            will_have_period: false,
            days_until_next_period,
            days_into_current_period: 0,
            confidence,
            day_in_cycle: Some(day_in_cycle),
            days_since_reference_start: delta,
        }
    }

    /// First period start strictly after the cycle containing `date`.
    ///
    /// For dates before the reference start this is the reference start.
    ///
    /// # Errors
    ///
    /// `DateOutOfRange` on `date` when the next start lies past the end of
    /// the calendar.
    pub fn next_period_start(
        profile: &CycleProfile,
        date: NaiveDate,
    ) -> Result<NaiveDate, ValidationError> {
        let prediction = Self::predict(profile, date);
        shift_date("date", date, prediction.days_until_next_period)
    }
}
