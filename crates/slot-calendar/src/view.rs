//! Slot picker grid model.
//!
//! [`SlotGrid`] is what a picker renders: one button per selectable week
//! bucket and one per valid day of the selected week, each flagged enabled
//! and selected. It serializes to JSON for web front ends and implements
//! `Display` as a plain-text grid:
//!
//! ```text
//! February 2026
//!   Week  [1]   2    3    4
//!   Day   [Sun 1]  Mon 2   Tue 3  ...
//! ```
//!
//! Selected cells are bracketed, disabled cells are parenthesized.

use std::fmt;

use chrono::{Month, NaiveDate};
use serde::Serialize;

use crate::selection::SlotController;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekButton {
    pub week: u32,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayButton {
    pub day_of_week: u32,
    pub date: NaiveDate,
    pub label: String,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotGrid {
    pub month: Month,
    pub year: i32,
    pub weeks: Vec<WeekButton>,
    pub days: Vec<DayButton>,
    pub selected_date: Option<NaiveDate>,
}

impl SlotGrid {
    pub fn build(controller: &SlotController) -> Self {
        let state = controller.state();

        let weeks = (1..=controller.policy().max_week)
            .map(|week| WeekButton {
                week,
                enabled: controller.is_week_selectable(week),
                selected: week == state.week,
            })
            .collect();

        let days = controller
            .valid_days()
            .into_iter()
            .map(|slot| DayButton {
                enabled: controller.is_day_selectable(slot.day_of_week),
                selected: slot.day_of_week == state.day,
                day_of_week: slot.day_of_week,
                date: slot.date,
                label: slot.label,
            })
            .collect();

        Self {
            month: state.month,
            year: state.year,
            weeks,
            days,
            selected_date: controller.selected_date(),
        }
    }
}

fn cell(text: &str, enabled: bool, selected: bool) -> String {
    if selected {
        format!("[{text}]")
    } else if !enabled {
        format!("({text})")
    } else {
        format!(" {text} ")
    }
}

impl fmt::Display for SlotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.month.name(), self.year)?;

        write!(f, "  Week ")?;
        for w in &self.weeks {
            write!(f, " {}", cell(&w.week.to_string(), w.enabled, w.selected))?;
        }
        writeln!(f)?;

        write!(f, "  Day  ")?;
        for d in &self.days {
            write!(f, " {}", cell(&d.label, d.enabled, d.selected))?;
        }
        writeln!(f)?;

        match self.selected_date {
            Some(date) => writeln!(f, "  Selected: {}", date.format("%A, %B %-d, %Y")),
            None => writeln!(f, "  Selected: none"),
        }
    }
}
