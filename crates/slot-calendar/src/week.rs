//! Day-of-week numbering shared by every slot computation.
//!
//! A slot's day number and a month's week buckets are both counted from the
//! same [`WeekStart`]. Mixing conventions (Sunday-first day labels with
//! Monday-first "current day") makes past-slot comparisons meaningless, so
//! every public function takes the convention from one [`SlotOptions`].

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Which weekday is day 1 of a slot week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Slot-grid convention: Sunday = 1 … Saturday = 7.
    #[default]
    Sunday,
    /// ISO 8601 convention: Monday = 1 … Sunday = 7.
    Monday,
}

/// The convention used when callers do not pass [`SlotOptions`].
pub const DEFAULT_WEEK_START: WeekStart = WeekStart::Sunday;

/// Number of slots in a week bucket.
pub const DAYS_PER_WEEK: u32 = 7;

/// Upper bound for a week-of-month bucket. A 31-day month starting on the
/// last day of the week touches six buckets.
pub const MAX_WEEKS_IN_MONTH: u32 = 6;

impl WeekStart {
    /// The weekday numbered 1 under this convention.
    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Zero-based distance from the week start to `weekday`.
    pub fn days_from_start(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// One-based day number (1..=7) of `weekday`.
    pub fn day_number(self, weekday: Weekday) -> u32 {
        self.days_from_start(weekday) + 1
    }

    /// Inverse of [`WeekStart::day_number`]. `None` outside 1..=7.
    pub fn weekday(self, day_number: u32) -> Option<Weekday> {
        if !(1..=DAYS_PER_WEEK).contains(&day_number) {
            return None;
        }
        let mut weekday = self.first_weekday();
        for _ in 1..day_number {
            weekday = weekday.succ();
        }
        Some(weekday)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => f.write_str("sunday"),
            WeekStart::Monday => f.write_str("monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(SlotError::InvalidWeekStart(format!("'{other}'"))),
        }
    }
}

/// Options shared by the calendar and period functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotOptions {
    /// Which day starts the week for day numbering and week buckets.
    #[serde(default)]
    pub week_start: WeekStart,
}

impl SlotOptions {
    pub fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }
}

/// Convert a zero-based month index (0 = January) into a [`Month`].
///
/// # Errors
///
/// Returns [`SlotError::InvalidMonth`] for indices above 11.
pub fn month_from_index(index: u32) -> crate::error::Result<Month> {
    month_from_number(index + 1)
        .map_err(|_| SlotError::InvalidMonth(format!("index {index} is outside 0..=11")))
}

/// Convert a one-based month number (1 = January) into a [`Month`].
///
/// # Errors
///
/// Returns [`SlotError::InvalidMonth`] for numbers outside 1..=12.
pub fn month_from_number(number: u32) -> crate::error::Result<Month> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or_else(|| SlotError::InvalidMonth(format!("{number} is outside 1..=12")))
}
