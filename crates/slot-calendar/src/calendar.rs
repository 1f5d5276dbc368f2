//! Week-of-month bucket math.
//!
//! A month is cut into week buckets anchored on the configured week-start
//! day. Bucket 1 holds the 1st of the month plus whatever days of that
//! calendar week are still in the month; later buckets hold full weeks
//! until the last, which is usually partial. Candidate days that roll into
//! the previous or next month are dropped, so a bucket can be partial or
//! even empty.
//!
//! All functions here are pure: same inputs, same output, no clock access.

use chrono::{Datelike, Duration, Month, NaiveDate};
use serde::Serialize;

use crate::week::{SlotOptions, DAYS_PER_WEEK};

/// A concrete day inside a week bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarSlot {
    /// Day number within the week (1..=7, counted from the week start).
    pub day_of_week: u32,
    /// Day of the month (1..=31).
    pub calendar_date: u32,
    /// The full date.
    pub date: NaiveDate,
    /// Short label such as `"Sun 1"`.
    pub label: String,
}

/// A (week-of-month, day-of-week) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotCoordinate {
    pub week: u32,
    pub day: u32,
}

/// The 1st of `month` in `year`, or `None` if the year is outside chrono's range.
pub fn first_of_month(month: Month, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
}

/// Number of days in `month` of `year` (0 if the year is out of range).
pub fn days_in_month(month: Month, year: i32) -> u32 {
    if first_of_month(month, year).is_none() {
        return 0;
    }
    let next_year = if month == Month::December { year + 1 } else { year };
    let next = first_of_month(month.succ(), next_year);
    match next.and_then(|n| n.pred_opt()) {
        Some(last) => last.day(),
        // December of the last representable year
        None => 31,
    }
}

/// How many week buckets `month` touches (4..=6).
pub fn weeks_in_month(month: Month, year: i32, options: &SlotOptions) -> u32 {
    let Some(first) = first_of_month(month, year) else {
        return 0;
    };
    let offset = options.week_start.days_from_start(first.weekday());
    (days_in_month(month, year) + offset).div_ceil(DAYS_PER_WEEK)
}

/// Valid slots for a week bucket using the default week start.
///
/// See [`compute_valid_days_for_week_with_options`].
pub fn compute_valid_days_for_week(week: u32, month: Month, year: i32) -> Vec<CalendarSlot> {
    compute_valid_days_for_week_with_options(week, month, year, &SlotOptions::default())
}

/// Valid slots for week bucket `week` of `month`/`year`, ascending by day of week.
///
/// The bucket's first candidate is `1 + (week - 1) * 7 - offset`, where
/// `offset` is how far the 1st of the month sits from the week start. The
/// seven candidates are resolved with calendar rollover and only those that
/// land inside the target month are returned.
///
/// Week 0 and weeks past the end of the month are out of contract; they
/// yield an empty list rather than panicking.
///
/// # Examples
///
/// ```
/// use chrono::Month;
/// use slot_calendar::calendar::compute_valid_days_for_week;
///
/// // February 2026 starts on a Sunday.
/// let slots = compute_valid_days_for_week(1, Month::February, 2026);
/// assert_eq!(slots.len(), 7);
/// assert_eq!(slots[0].label, "Sun 1");
/// ```
pub fn compute_valid_days_for_week_with_options(
    week: u32,
    month: Month,
    year: i32,
    options: &SlotOptions,
) -> Vec<CalendarSlot> {
    let Some(first) = first_of_month(month, year) else {
        return Vec::new();
    };
    let offset = i64::from(options.week_start.days_from_start(first.weekday()));
    let week_start_date = 1 + (i64::from(week) - 1) * i64::from(DAYS_PER_WEEK) - offset;

    (0..DAYS_PER_WEEK)
        .filter_map(|i| {
            let candidate = week_start_date + i64::from(i);
            let date = first.checked_add_signed(Duration::try_days(candidate - 1)?)?;
            if date.month() != first.month() || date.year() != first.year() {
                return None;
            }
            Some(CalendarSlot {
                day_of_week: i + 1,
                calendar_date: date.day(),
                date,
                label: slot_label(date),
            })
        })
        .collect()
}

/// Locate `date` in its month's week buckets.
pub fn week_of_date(date: NaiveDate, options: &SlotOptions) -> SlotCoordinate {
    let ws = options.week_start;
    let first = date.with_day(1).unwrap_or(date);
    let offset = ws.days_from_start(first.weekday());
    SlotCoordinate {
        week: (date.day() + offset).div_ceil(DAYS_PER_WEEK),
        day: ws.day_number(date.weekday()),
    }
}

/// Resolve a single slot to its date, if it falls inside the month.
pub fn slot_date(
    slot: SlotCoordinate,
    month: Month,
    year: i32,
    options: &SlotOptions,
) -> Option<NaiveDate> {
    compute_valid_days_for_week_with_options(slot.week, month, year, options)
        .into_iter()
        .find(|s| s.day_of_week == slot.day)
        .map(|s| s.date)
}

fn slot_label(date: NaiveDate) -> String {
    date.format("%a %-d").to_string()
}
