//! HTTP DTOs (Data Transfer Objects) for forecast endpoints.
//!
//! These types define the JSON request/response structure for the forecast API.
//! They serve as the boundary between HTTP and the application layer, and are
//! where predictions become user-facing text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::application::PredictResult;
use crate::domain::cycle::{CalendarWindow, Confidence, CycleProfile, DayClassification, PredictionResult};
use crate::domain::foundation::format_calendar_date;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to store the cycle profile (completes onboarding).
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProfileRequest {
    /// ISO date (`YYYY-MM-DD`) the last period started.
    pub last_period_start: String,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: i64,
    #[serde(default = "default_period_length")]
    pub period_length: i64,
}

fn default_cycle_length() -> i64 {
    i64::from(crate::domain::foundation::CycleLength::DEFAULT.days())
}

fn default_period_length() -> i64 {
    i64::from(crate::domain::foundation::PeriodLength::DEFAULT.days())
}

/// Query string for `GET /api/prediction`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionParams {
    /// Date to predict; today when absent.
    pub date: Option<String>,
}

/// Query string for `GET /api/calendar`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarParams {
    /// Center of the window; today when absent.
    pub center: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Stored profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub last_period_start: String,
    pub cycle_length: u32,
    pub period_length: u32,
}

impl From<CycleProfile> for ProfileResponse {
    fn from(profile: CycleProfile) -> Self {
        Self {
            last_period_start: format_calendar_date(profile.last_period_start()),
            cycle_length: profile.cycle_length().days(),
            period_length: profile.period_length().days(),
        }
    }
}

/// Prediction for one date.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub date: String,
    pub will_have_period: bool,
    pub days_until_next_period: i64,
    pub days_into_current_period: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_in_cycle: Option<i64>,
    pub days_since_reference_start: i64,
    pub is_before_reference: bool,
    pub confidence: Confidence,
    pub confidence_label: &'static str,
    pub next_period_start: String,
    /// Human-readable summary of the prediction.
    pub message: String,
}

impl From<PredictResult> for PredictionResponse {
    fn from(result: PredictResult) -> Self {
        let p = result.prediction;
        Self {
            date: format_calendar_date(result.date),
            will_have_period: p.will_have_period,
            days_until_next_period: p.days_until_next_period,
            days_into_current_period: p.days_into_current_period,
            day_in_cycle: p.day_in_cycle,
            days_since_reference_start: p.days_since_reference_start,
            is_before_reference: p.is_before_reference(),
            confidence: p.confidence,
            confidence_label: p.confidence.label(),
            next_period_start: format_calendar_date(result.next_period_start),
            message: prediction_message(&p),
        }
    }
}

/// Maps a prediction to the sentence shown next to it.
pub fn prediction_message(prediction: &PredictionResult) -> String {
    if prediction.is_before_reference() {
        return "This date is before the recorded period start; no prediction is available."
            .to_string();
    }

    if prediction.will_have_period {
        return format!(
            "Period expected: day {} of your period.",
            prediction.days_into_current_period + 1
        );
    }

    let due = plural_days(prediction.days_until_next_period);
    match prediction.confidence {
        Confidence::Medium => format!("No period expected, but the next one is close: due in {}.", due),
        _ => format!("No period expected. The next one is due in {}.", due),
    }
}

fn plural_days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

/// One cell of the calendar.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDayResponse {
    pub date: String,
    pub day_of_month: u32,
    /// 0 = Monday ... 6 = Sunday.
    pub weekday: u32,
    pub is_period_day: bool,
    pub is_before_reference: bool,
    pub is_other_month: bool,
    pub is_center: bool,
    pub day_in_cycle: i64,
}

impl From<&DayClassification> for CalendarDayResponse {
    fn from(day: &DayClassification) -> Self {
        Self {
            date: format_calendar_date(day.date),
            day_of_month: day.date.day(),
            weekday: day.date.weekday().num_days_from_monday(),
            is_period_day: day.is_period_day,
            is_before_reference: day.is_before_reference,
            is_other_month: day.is_other_month,
            is_center: day.is_center,
            day_in_cycle: day.day_in_cycle,
        }
    }
}

/// Calendar window around a center date.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarResponse {
    pub center: String,
    pub month_label: String,
    /// Absent when the page would leave the calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_center: Option<String>,
    pub period_day_count: usize,
    pub days: Vec<CalendarDayResponse>,
}

impl From<&CalendarWindow> for CalendarResponse {
    fn from(window: &CalendarWindow) -> Self {
        Self {
            center: format_calendar_date(window.center()),
            month_label: window.month_label(),
            previous_center: window.previous_center().map(format_calendar_date),
            next_center: window.next_center().map(format_calendar_date),
            period_day_count: window.period_day_count(),
            days: window.days().iter().map(CalendarDayResponse::from).collect(),
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Today's date on the server's local clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
