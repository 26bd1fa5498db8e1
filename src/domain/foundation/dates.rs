//! Calendar date helpers.
//!
//! All cycle arithmetic works on whole calendar days (`NaiveDate`), never on
//! instants, so time zones and daylight saving shifts cannot move a day
//! across a boundary.

use chrono::{DateTime, Datelike, Days, NaiveDate};

use super::ValidationError;

/// Earliest year accepted from user input.
pub const MIN_YEAR: i32 = 1;

/// Latest year accepted from user input.
pub const MAX_YEAR: i32 = 9999;

/// Signed number of whole days from `reference` to `date`.
///
/// Negative when `date` precedes `reference`.
pub fn days_between(date: NaiveDate, reference: NaiveDate) -> i64 {
    date.signed_duration_since(reference).num_days()
}

/// Shifts a date by a signed number of days.
///
/// Returns `None` when the result falls outside chrono's calendar.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// Like [`add_days`], but reports an unrepresentable result against `field`.
pub fn shift_date(field: &str, date: NaiveDate, days: i64) -> Result<NaiveDate, ValidationError> {
    add_days(date, days).ok_or_else(|| {
        ValidationError::date_out_of_range(field, format!("{} shifted by {} days", date, days))
    })
}

/// True when both dates fall in the same calendar month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Parses an ISO calendar date.
///
/// Accepts `YYYY-MM-DD` as well as a full RFC 3339 timestamp, in which case
/// only the date part as written is kept (no time zone conversion). Years
/// outside `MIN_YEAR..=MAX_YEAR` are rejected.
pub fn parse_calendar_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();

    let date = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.date_naive())
            .map_err(|_| {
                ValidationError::invalid_format(
                    field,
                    format!("expected YYYY-MM-DD or an RFC 3339 timestamp, got '{}'", value),
                )
            })?,
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(ValidationError::date_out_of_range(field, value));
    }

    Ok(date)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
