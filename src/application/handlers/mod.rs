//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod forecast;

pub use forecast::{
    CalendarHandler, CalendarQuery, GetProfileHandler, GetProfileQuery, PredictHandler,
    PredictQuery, PredictResult, ResetProfileCommand, ResetProfileHandler, ResetProfileResult,
    SaveProfileCommand, SaveProfileHandler, SaveProfileResult,
};
