//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, date helpers, and error types
//! that form the vocabulary of the cycle forecasting domain.

mod cycle_length;
mod dates;
mod errors;
mod period_length;

pub use cycle_length::CycleLength;
pub use dates::{
    add_days, days_between, format_calendar_date, parse_calendar_date, same_month, shift_date,
    MAX_YEAR, MIN_YEAR,
};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use period_length::PeriodLength;
