//! Error types for slot-calendar operations.
//!
//! The slot math and the selection reducer never fail; these errors come
//! from the fallible edges (parsing caller input, timezones, stock
//! allocation checks).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid week start: {0}")]
    InvalidWeekStart(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Duplicate allocation for doctor '{0}'")]
    DuplicateAllocation(String),

    #[error("Over-allocated: requested {requested} but only {available} available")]
    OverAllocated { requested: u64, available: u32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
