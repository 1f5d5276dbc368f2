//! # slot-calendar
//!
//! Week-of-month visit slot planning for field-force scheduling.
//!
//! A visit slot is a (week-of-month, day-of-week) pair that resolves onto a
//! real date of a target month. This crate computes which slots exist in a
//! month, where "today" falls, and keeps a user's slot selection valid as
//! the week or month changes.
//!
//! ## Modules
//!
//! - [`week`] — Day numbering convention shared by every computation
//! - [`calendar`] — Week bucket math: valid days per week, weeks per month
//! - [`period`] — Current week/day for a reference date or timezone
//! - [`selection`] — Self-correcting selection reducer and controller
//! - [`view`] — Slot picker grid model and text rendering
//! - [`allocation`] — Stock liquidation quantity reconciliation
//! - [`error`] — Error types

pub mod allocation;
pub mod calendar;
pub mod error;
pub mod period;
pub mod selection;
pub mod view;
pub mod week;

pub use allocation::{reconcile_allocations, remaining_for, Allocation, AllocationSummary};
pub use calendar::{
    compute_valid_days_for_week, compute_valid_days_for_week_with_options, days_in_month,
    slot_date, week_of_date, weeks_in_month, CalendarSlot, SlotCoordinate,
};
pub use error::SlotError;
pub use period::{
    compute_current_period, compute_current_period_with_options, parse_date, today_in_timezone,
    ReferencePeriod,
};
pub use selection::{
    normalize, reduce, SlotAction, SlotConfig, SlotContext, SlotController, SlotPolicy, SlotState,
    DEFAULT_MAX_WEEK,
};
pub use view::{DayButton, SlotGrid, WeekButton};
pub use week::{
    month_from_index, month_from_number, SlotOptions, WeekStart, DEFAULT_WEEK_START,
    MAX_WEEKS_IN_MONTH,
};
