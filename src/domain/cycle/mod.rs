//! Cycle module - Period prediction and calendar classification.
//!
//! Everything here is pure: results depend only on the profile and the
//! dates passed in, never on the clock or on stored state.
//!
//! - `profile` - the validated [`CycleProfile`] and its persisted record
//! - `predictor` - single-date prediction ([`CyclePredictor`])
//! - `calendar` - 31-day window classification ([`CalendarRangeBuilder`])

mod calendar;
mod predictor;
mod profile;

pub use calendar::{
    CalendarRangeBuilder, CalendarWindow, DayClassification, PAGE_STEP_DAYS, WINDOW_LEN,
    WINDOW_RADIUS_DAYS,
};
pub use predictor::{Confidence, CyclePredictor, PredictionResult, IMMINENT_WINDOW_DAYS};
pub use profile::{CycleProfile, ProfileRecord};
