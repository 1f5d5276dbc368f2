//! Current week-of-month and day-of-week for a reference date.
//!
//! Functions here never read the system clock. The caller passes the
//! reference date, or a UTC instant plus an IANA timezone when "today"
//! depends on where the field executive is.

use chrono::{DateTime, Datelike, Month, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::calendar::{week_of_date, SlotCoordinate};
use crate::error::{Result, SlotError};
use crate::week::{month_from_number, SlotOptions};

/// The slot "today" falls on, used as the baseline for past-slot checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferencePeriod {
    /// Week-of-month bucket of the reference date.
    pub week: u32,
    /// Day-of-week number of the reference date.
    pub day: u32,
    /// Month of the reference date.
    pub month: Month,
    /// Year of the reference date.
    pub year: i32,
}

impl ReferencePeriod {
    pub fn coordinate(&self) -> SlotCoordinate {
        SlotCoordinate {
            week: self.week,
            day: self.day,
        }
    }

    /// Whether this period lies in `month` of `year`.
    pub fn is_in(&self, month: Month, year: i32) -> bool {
        self.month == month && self.year == year
    }
}

/// Current period for `reference` using the default week start.
pub fn compute_current_period(reference: NaiveDate) -> ReferencePeriod {
    compute_current_period_with_options(reference, &SlotOptions::default())
}

/// Current period for `reference`.
///
/// `day` is the reference weekday numbered from the week start, and
/// `week = ceil((day_of_month + offset) / 7)` where `offset` is how far the
/// 1st of the month sits from the week start. With [`crate::WeekStart::Monday`]
/// this gives Monday = 1 … Sunday = 7 and Monday-anchored weeks; with the
/// default Sunday start it lands on the same bucket as
/// [`crate::calendar::compute_valid_days_for_week`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slot_calendar::period::compute_current_period;
///
/// let period = compute_current_period(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
/// assert_eq!((period.week, period.day), (1, 2));
/// ```
pub fn compute_current_period_with_options(
    reference: NaiveDate,
    options: &SlotOptions,
) -> ReferencePeriod {
    let coord = week_of_date(reference, options);
    // month() is always 1..=12 for a valid NaiveDate
    let month = month_from_number(reference.month()).unwrap_or(Month::January);
    ReferencePeriod {
        week: coord.week,
        day: coord.day,
        month,
        year: reference.year(),
    }
}

/// The calendar date of `now` in the IANA timezone `timezone`.
///
/// # Errors
///
/// Returns [`SlotError::InvalidTimezone`] if the timezone name is unknown.
pub fn today_in_timezone(now: DateTime<Utc>, timezone: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`SlotError::InvalidDate`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| SlotError::InvalidDate(format!("'{}': {}", s, e)))
}

fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| SlotError::InvalidTimezone(format!("'{}'", s)))
}
