//! Calendar range builder - classifies a 31-day window around a date.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{CyclePredictor, CycleProfile};
use crate::domain::foundation::{add_days, days_between, same_month, shift_date, ValidationError};

/// Days shown on each side of the center date.
pub const WINDOW_RADIUS_DAYS: i64 = 15;

/// Total days in a window.
pub const WINDOW_LEN: usize = (2 * WINDOW_RADIUS_DAYS + 1) as usize;

/// Days the calendar moves when paging backwards or forwards.
pub const PAGE_STEP_DAYS: i64 = 30;

/// Classification of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    pub date: NaiveDate,
    pub is_period_day: bool,
    pub days_since_reference_start: i64,
    /// Always in `[0, cycle_length)`, also before the reference start.
    pub day_in_cycle: i64,
    pub is_before_reference: bool,
    /// Falls in a different calendar month than the window's center.
    pub is_other_month: bool,
    pub is_center: bool,
}

/// Builds the day classifications for a calendar window.
pub struct CalendarRangeBuilder;

impl CalendarRangeBuilder {
    /// Classifies a single day relative to the window's center.
    pub fn classify(profile: &CycleProfile, date: NaiveDate, center: NaiveDate) -> DayClassification {
        let delta = days_between(date, profile.last_period_start());
        let is_before_reference = delta < 0;
        let day_in_cycle = CyclePredictor::day_in_cycle(profile, delta);

        DayClassification {
            date,
            is_period_day: !is_before_reference && CyclePredictor::is_period_day(profile, day_in_cycle),
            days_since_reference_start: delta,
            day_in_cycle,
            is_before_reference,
            is_other_month: !same_month(date, center),
            is_center: date == center,
        }
    }

    /// Returns the 31 days from `center - 15` to `center + 15`, ascending.
    ///
    /// # Errors
    ///
    /// `DateOutOfRange` on `center` when either end of the window lies
    /// outside the calendar.
    pub fn build(
        profile: &CycleProfile,
        center: NaiveDate,
    ) -> Result<Vec<DayClassification>, ValidationError> {
        let start = shift_date("center", center, -WINDOW_RADIUS_DAYS)?;
        shift_date("center", center, WINDOW_RADIUS_DAYS)?;

        Ok((0..WINDOW_LEN as i64)
            .filter_map(|offset| add_days(start, offset))
            .map(|date| Self::classify(profile, date, center))
            .collect())
    }
}

/// A classified window with paging helpers for a calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    profile: CycleProfile,
    center: NaiveDate,
    days: Vec<DayClassification>,
}

impl CalendarWindow {
    pub fn around(profile: CycleProfile, center: NaiveDate) -> Result<Self, ValidationError> {
        let days = CalendarRangeBuilder::build(&profile, center)?;
        Ok(Self {
            profile,
            center,
            days,
        })
    }

    pub fn center(&self) -> NaiveDate {
        self.center
    }

    pub fn days(&self) -> &[DayClassification] {
        &self.days
    }

    pub fn first(&self) -> NaiveDate {
        self.days.first().map_or(self.center, |d| d.date)
    }

    pub fn last(&self) -> NaiveDate {
        self.days.last().map_or(self.center, |d| d.date)
    }

    /// Number of period days visible in the window.
    pub fn period_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_period_day).count()
    }

    /// Month name of the window, or "First - Last" when it spans two months.
    pub fn month_label(&self) -> String {
        let start = month_name(self.first());
        let end = month_name(self.last());
        if start == end {
            start.to_string()
        } else {
            format!("{} - {}", start, end)
        }
    }

    /// Center one page earlier, if that window fits in the calendar.
    pub fn previous_center(&self) -> Option<NaiveDate> {
        self.page_center(-PAGE_STEP_DAYS)
    }

    /// Center one page later, if that window fits in the calendar.
    pub fn next_center(&self) -> Option<NaiveDate> {
        self.page_center(PAGE_STEP_DAYS)
    }

    /// The window re-centered one page earlier.
    pub fn previous(&self) -> Result<Self, ValidationError> {
        let center = shift_date("center", self.center, -PAGE_STEP_DAYS)?;
        Self::around(self.profile, center)
    }

    /// The window re-centered one page later.
    pub fn next(&self) -> Result<Self, ValidationError> {
        let center = shift_date("center", self.center, PAGE_STEP_DAYS)?;
        Self::around(self.profile, center)
    }

    fn page_center(&self, step: i64) -> Option<NaiveDate> {
        let center = add_days(self.center, step)?;
        add_days(center, -WINDOW_RADIUS_DAYS)?;
        add_days(center, WINDOW_RADIUS_DAYS)?;
        Some(center)
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    Month::try_from(date.month() as u8)
        .map(|m| m.name())
        .unwrap_or("")
}
