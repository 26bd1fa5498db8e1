//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change the stored profile; query handlers only read it.

pub mod handlers;

pub use handlers::{
    CalendarHandler, CalendarQuery, GetProfileHandler, GetProfileQuery, PredictHandler,
    PredictQuery, PredictResult, ResetProfileCommand, ResetProfileHandler, ResetProfileResult,
    SaveProfileCommand, SaveProfileHandler, SaveProfileResult,
};
