//! Week/day slot selection that can never end up on an invalid slot.
//!
//! State transitions are a pure reducer, [`reduce`], over [`SlotState`].
//! Requests that would break the invariants are ignored, and every week or
//! month change is followed by [`normalize`], which silently moves the
//! selection back onto a selectable day. [`SlotController`] wraps the
//! reducer for callers that want a mutable object.
//!
//! Invariants after every transition:
//!
//! - the selected week has at least one valid day in the active month;
//! - the selected day is one of that week's valid days;
//! - a selection in the reference week is never earlier than the
//!   reference day, when the week has such a day.

use std::cmp::Ordering;

use chrono::{Month, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{compute_valid_days_for_week_with_options, CalendarSlot};
use crate::period::{compute_current_period_with_options, ReferencePeriod};
use crate::week::{SlotOptions, MAX_WEEKS_IN_MONTH};

/// Highest selectable week bucket unless configured otherwise.
pub const DEFAULT_MAX_WEEK: u32 = 4;

/// Construction-time settings for a [`SlotController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotConfig {
    /// Reject selections before the reference slot.
    pub past_disabled: bool,
    /// Active month.
    pub month: Month,
    /// Active year.
    pub year: i32,
    /// Highest selectable week bucket (clamped to 1..=6).
    pub max_week: u32,
    /// Compare the active month with the reference month before comparing
    /// weeks: earlier months are entirely past, later months have no past
    /// slots. Off by default, so week/day comparisons ignore the month.
    pub month_aware_past: bool,
    /// Day numbering convention.
    pub options: SlotOptions,
}

impl SlotConfig {
    pub fn new(month: Month, year: i32) -> Self {
        Self {
            past_disabled: false,
            month,
            year,
            max_week: DEFAULT_MAX_WEEK,
            month_aware_past: false,
            options: SlotOptions::default(),
        }
    }

    pub fn with_past_disabled(mut self, past_disabled: bool) -> Self {
        self.past_disabled = past_disabled;
        self
    }

    pub fn with_max_week(mut self, max_week: u32) -> Self {
        self.max_week = max_week;
        self
    }

    pub fn with_month_aware_past(mut self, month_aware_past: bool) -> Self {
        self.month_aware_past = month_aware_past;
        self
    }

    pub fn with_options(mut self, options: SlotOptions) -> Self {
        self.options = options;
        self
    }
}

/// Rules that stay fixed across transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotPolicy {
    pub past_disabled: bool,
    pub max_week: u32,
    pub month_aware_past: bool,
    pub options: SlotOptions,
}

impl From<&SlotConfig> for SlotPolicy {
    fn from(config: &SlotConfig) -> Self {
        Self {
            past_disabled: config.past_disabled,
            max_week: config.max_week.clamp(1, MAX_WEEKS_IN_MONTH),
            month_aware_past: config.month_aware_past,
            options: config.options,
        }
    }
}

/// The active month plus the selected (week, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotState {
    pub month: Month,
    pub year: i32,
    pub week: u32,
    pub day: u32,
}

impl SlotState {
    /// Week 1, day 1 of `month`, before normalization.
    pub fn initial(month: Month, year: i32) -> Self {
        Self {
            month,
            year,
            week: 1,
            day: 1,
        }
    }
}

/// A requested change to a [`SlotState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    SetWeek(u32),
    SetDay(u32),
    SetMonth { month: Month, year: i32 },
}

/// Everything [`reduce`] needs besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct SlotContext<'a> {
    pub policy: &'a SlotPolicy,
    pub reference: &'a ReferencePeriod,
}

impl SlotContext<'_> {
    fn valid_days(&self, state: &SlotState, week: u32) -> Vec<CalendarSlot> {
        compute_valid_days_for_week_with_options(
            week,
            state.month,
            state.year,
            &self.policy.options,
        )
    }

    /// How the active month compares with the reference month. Every month
    /// counts as the reference month unless `month_aware_past` is set.
    fn month_relation(&self, state: &SlotState) -> Ordering {
        if !self.policy.month_aware_past {
            return Ordering::Equal;
        }
        (state.year, state.month.number_from_month())
            .cmp(&(self.reference.year, self.reference.month.number_from_month()))
    }

    /// Whether `week` is locked as past. Always false unless past slots are disabled.
    pub fn is_week_past(&self, state: &SlotState, week: u32) -> bool {
        if !self.policy.past_disabled {
            return false;
        }
        match self.month_relation(state) {
            Ordering::Less => true,
            Ordering::Equal => week < self.reference.week,
            Ordering::Greater => false,
        }
    }

    /// Whether `(week, day)` is strictly before the reference slot. Always
    /// false unless past slots are disabled.
    pub fn is_slot_past(&self, state: &SlotState, week: u32, day: u32) -> bool {
        if !self.policy.past_disabled {
            return false;
        }
        match self.month_relation(state) {
            Ordering::Less => true,
            Ordering::Equal => (week, day) < (self.reference.week, self.reference.day),
            Ordering::Greater => false,
        }
    }

    /// Whether `week` can be selected at all.
    pub fn is_week_selectable(&self, state: &SlotState, week: u32) -> bool {
        (1..=self.policy.max_week).contains(&week)
            && !self.is_week_past(state, week)
            && !self.valid_days(state, week).is_empty()
    }
}

/// Apply `action` to `state`.
///
/// Rejected actions return the state unchanged:
///
/// - `SetWeek(w)` when `w` is outside `1..=max_week`, locked as past, or has
///   no valid days in the active month;
/// - `SetDay(d)` when `d` is not a valid day of the selected week, or
///   `(week, d)` is before the reference slot while past slots are disabled.
///
/// Week and month changes are followed by [`normalize`].
pub fn reduce(state: SlotState, action: SlotAction, ctx: &SlotContext<'_>) -> SlotState {
    match action {
        SlotAction::SetWeek(week) => {
            if !ctx.is_week_selectable(&state, week) {
                debug!(week, "rejected week selection");
                return state;
            }
            normalize(SlotState { week, ..state }, ctx)
        }
        SlotAction::SetDay(day) => {
            let valid = ctx.valid_days(&state, state.week);
            if !valid.iter().any(|s| s.day_of_week == day) {
                debug!(week = state.week, day, "rejected day outside the week");
                return state;
            }
            if ctx.is_slot_past(&state, state.week, day) {
                debug!(week = state.week, day, "rejected past day");
                return state;
            }
            SlotState { day, ..state }
        }
        SlotAction::SetMonth { month, year } => normalize(
            SlotState {
                month,
                year,
                ..state
            },
            ctx,
        ),
    }
}

/// Move `state` onto a selectable slot.
///
/// 1. A week past `max_week` or without valid days falls back to the
///    nearest earlier week that has some. Week 1 always contains the 1st.
/// 2. With past slots disabled, a week before the reference week jumps to
///    the reference week when that week has days.
/// 3. A day outside the week's valid set becomes the first valid day.
/// 4. In the reference week, a day before the reference day is advanced to
///    the first valid day on or after it. This applies whether or not past
///    slots are disabled, and in any month unless `month_aware_past` is set.
pub fn normalize(state: SlotState, ctx: &SlotContext<'_>) -> SlotState {
    let mut next = state;

    next.week = next.week.clamp(1, ctx.policy.max_week);
    while next.week > 1 && ctx.valid_days(&next, next.week).is_empty() {
        next.week -= 1;
    }

    if ctx.is_week_past(&next, next.week)
        && ctx.month_relation(&next) == Ordering::Equal
        && ctx.reference.week <= ctx.policy.max_week
        && !ctx.valid_days(&next, ctx.reference.week).is_empty()
    {
        next.week = ctx.reference.week;
    }

    let valid = ctx.valid_days(&next, next.week);
    if !valid.iter().any(|s| s.day_of_week == next.day) {
        if let Some(first) = valid.first() {
            next.day = first.day_of_week;
        }
    }

    if ctx.month_relation(&next) == Ordering::Equal
        && next.week == ctx.reference.week
        && next.day < ctx.reference.day
    {
        if let Some(slot) = valid.iter().find(|s| s.day_of_week >= ctx.reference.day) {
            next.day = slot.day_of_week;
        }
    }

    if next != state {
        debug!(
            from_week = state.week,
            from_day = state.day,
            to_week = next.week,
            to_day = next.day,
            "corrected slot selection"
        );
    }
    next
}

/// Owns a [`SlotState`] and applies actions through [`reduce`].
#[derive(Debug, Clone)]
pub struct SlotController {
    state: SlotState,
    policy: SlotPolicy,
    reference: ReferencePeriod,
}

impl SlotController {
    /// Start at week 1, day 1 of the configured month, then normalize.
    pub fn new(config: SlotConfig, reference: ReferencePeriod) -> Self {
        Self::with_selection(config, reference, 1, 1)
    }

    /// Start at `(week, day)` of the configured month, then normalize.
    pub fn with_selection(
        config: SlotConfig,
        reference: ReferencePeriod,
        week: u32,
        day: u32,
    ) -> Self {
        let policy = SlotPolicy::from(&config);
        let initial = SlotState {
            week,
            day,
            ..SlotState::initial(config.month, config.year)
        };
        let mut controller = Self {
            state: initial,
            policy,
            reference,
        };
        let normalized = normalize(initial, &controller.context());
        controller.state = normalized;
        controller
    }

    /// Build the reference period from `today` with the config's week start.
    pub fn for_today(config: SlotConfig, today: NaiveDate) -> Self {
        let reference = compute_current_period_with_options(today, &config.options);
        Self::new(config, reference)
    }

    fn context(&self) -> SlotContext<'_> {
        SlotContext {
            policy: &self.policy,
            reference: &self.reference,
        }
    }

    /// Apply `action`; returns whether the state changed.
    pub fn dispatch(&mut self, action: SlotAction) -> bool {
        let next = reduce(self.state, action, &self.context());
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn set_week(&mut self, week: u32) -> bool {
        self.dispatch(SlotAction::SetWeek(week))
    }

    pub fn set_day(&mut self, day: u32) -> bool {
        self.dispatch(SlotAction::SetDay(day))
    }

    pub fn set_month(&mut self, month: Month, year: i32) -> bool {
        self.dispatch(SlotAction::SetMonth { month, year })
    }

    pub fn selected_week(&self) -> u32 {
        self.state.week
    }

    pub fn selected_day(&self) -> u32 {
        self.state.day
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn policy(&self) -> &SlotPolicy {
        &self.policy
    }

    pub fn reference(&self) -> &ReferencePeriod {
        &self.reference
    }

    /// Valid slots of the selected week.
    pub fn valid_days(&self) -> Vec<CalendarSlot> {
        self.context().valid_days(&self.state, self.state.week)
    }

    /// Valid slots of an arbitrary week of the active month.
    pub fn valid_days_for_week(&self, week: u32) -> Vec<CalendarSlot> {
        self.context().valid_days(&self.state, week)
    }

    /// The concrete date of the current selection.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.valid_days()
            .into_iter()
            .find(|s| s.day_of_week == self.state.day)
            .map(|s| s.date)
    }

    pub fn is_week_selectable(&self, week: u32) -> bool {
        self.context().is_week_selectable(&self.state, week)
    }

    /// Whether `day` of the selected week would be accepted by [`Self::set_day`].
    pub fn is_day_selectable(&self, day: u32) -> bool {
        let ctx = self.context();
        ctx.valid_days(&self.state, self.state.week)
            .iter()
            .any(|s| s.day_of_week == day)
            && !ctx.is_slot_past(&self.state, self.state.week, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::compute_current_period;
    use crate::week::WeekStart;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Sun Feb 1 2026: week 1, day 1, so no slot is ever before it.
    fn open_reference() -> ReferencePeriod {
        compute_current_period(date(2026, 2, 1))
    }

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn test_defaults_on_full_first_week() {
        let ctl = SlotController::new(SlotConfig::new(Month::February, 2026), open_reference());
        assert_eq!(ctl.selected_week(), 1);
        assert_eq!(ctl.selected_day(), 1);
        assert_eq!(ctl.selected_date(), Some(date(2026, 2, 1)));
    }

    #[test]
    fn test_initial_day_corrected_on_partial_first_week() {
        // Jan 2026 week 1 is Thu 1..Sat 3 (days 5..7)
        let ctl = SlotController::new(SlotConfig::new(Month::January, 2026), open_reference());
        assert_eq!(ctl.selected_week(), 1);
        assert_eq!(ctl.selected_day(), 5);
    }

    #[test]
    fn test_initial_day_seven_corrected_to_one() {
        // March 2026 week 5 is Sun 29..Tue 31 (days 1..3)
        let config = SlotConfig::new(Month::March, 2026).with_max_week(5);
        let ctl = SlotController::with_selection(config, open_reference(), 5, 7);
        assert_eq!(ctl.selected_week(), 5);
        assert_eq!(ctl.selected_day(), 1);
        assert_eq!(ctl.selected_date(), Some(date(2026, 3, 29)));
    }

    #[test]
    fn test_initial_week_beyond_max_is_clamped() {
        let config = SlotConfig::new(Month::March, 2026);
        let ctl = SlotController::with_selection(config, open_reference(), 6, 1);
        assert_eq!(ctl.selected_week(), DEFAULT_MAX_WEEK);
    }

    #[test]
    fn test_max_week_is_clamped_to_six() {
        let config = SlotConfig::new(Month::August, 2026).with_max_week(40);
        let ctl = SlotController::new(config, open_reference());
        assert_eq!(ctl.policy().max_week, 6);
        let config = SlotConfig::new(Month::August, 2026).with_max_week(0);
        let ctl = SlotController::new(config, open_reference());
        assert_eq!(ctl.policy().max_week, 1);
    }

    // ── set_week ────────────────────────────────────────────────────────

    #[test]
    fn test_set_week_keeps_valid_day() {
        let mut ctl =
            SlotController::new(SlotConfig::new(Month::February, 2026), open_reference());
        assert!(ctl.set_day(4));
        assert!(ctl.set_week(3));
        assert_eq!(ctl.selected_day(), 4);
        assert_eq!(ctl.selected_date(), Some(date(2026, 2, 18)));
    }

    #[test]
    fn test_set_week_corrects_day_to_first_valid() {
        let config = SlotConfig::new(Month::March, 2026).with_max_week(5);
        let mut ctl = SlotController::new(config, open_reference());
        assert!(ctl.set_day(6));
        assert!(ctl.set_week(5));
        assert_eq!(ctl.selected_day(), 1);
    }

    #[test]
    fn test_set_week_twice_is_stable() {
        let config = SlotConfig::new(Month::March, 2026).with_max_week(5);
        let mut ctl = SlotController::new(config, open_reference());
        ctl.set_day(7);
        ctl.set_week(5);
        let first = ctl.state();
        assert!(!ctl.set_week(5));
        assert_eq!(ctl.state(), first);
    }

    #[test]
    fn test_set_week_rejects_empty_and_out_of_range() {
        let config = SlotConfig::new(Month::February, 2026).with_max_week(6);
        let mut ctl = SlotController::new(config, open_reference());
        assert!(!ctl.set_week(5)); // Feb 2026 has four buckets
        assert!(!ctl.set_week(0));
        assert!(!ctl.set_week(7));
        assert_eq!(ctl.selected_week(), 1);
    }

    #[test]
    fn test_set_week_respects_max_week() {
        let mut ctl =
            SlotController::new(SlotConfig::new(Month::March, 2026), open_reference());
        assert!(!ctl.set_week(5));
        assert!(ctl.set_week(4));
    }

    // ── set_day ─────────────────────────────────────────────────────────

    #[test]
    fn test_set_day_rejects_day_outside_week() {
        let mut ctl =
            SlotController::new(SlotConfig::new(Month::January, 2026), open_reference());
        assert!(!ctl.set_day(2)); // no Monday in week 1 of Jan 2026
        assert!(!ctl.set_day(0));
        assert!(!ctl.set_day(8));
        assert_eq!(ctl.selected_day(), 5);
        assert!(ctl.set_day(7));
        assert_eq!(ctl.selected_date(), Some(date(2026, 1, 3)));
    }

    // ── past lock ───────────────────────────────────────────────────────

    fn past_locked_feb() -> SlotController {
        // Wed Feb 11 2026: week 2, day 4
        let config = SlotConfig::new(Month::February, 2026).with_past_disabled(true);
        SlotController::for_today(config, date(2026, 2, 11))
    }

    #[test]
    fn test_past_disabled_starts_on_reference_slot() {
        let ctl = past_locked_feb();
        assert_eq!(ctl.reference().week, 2);
        assert_eq!(ctl.reference().day, 4);
        assert_eq!(ctl.selected_week(), 2);
        assert_eq!(ctl.selected_day(), 4);
    }

    #[test]
    fn test_past_disabled_rejects_earlier_week() {
        let mut ctl = past_locked_feb();
        assert!(!ctl.set_week(1));
        assert_eq!(ctl.selected_week(), 2);
        assert!(ctl.set_week(3));
        assert!(ctl.set_week(2));
    }

    #[test]
    fn test_past_disabled_rejects_earlier_day_in_current_week() {
        let mut ctl = past_locked_feb();
        assert!(!ctl.set_day(3));
        assert_eq!(ctl.selected_day(), 4);
        assert!(ctl.set_day(6));
        assert!(ctl.set_day(4));
    }

    #[test]
    fn test_past_disabled_allows_any_day_in_later_week() {
        let mut ctl = past_locked_feb();
        ctl.set_week(3);
        assert!(ctl.set_day(1));
        assert_eq!(ctl.selected_date(), Some(date(2026, 2, 15)));
    }

    #[test]
    fn test_past_lock_compares_week_and_day_in_any_month() {
        // Reference Feb 11 (week 2, day 4) applied to March 2026
        let config = SlotConfig::new(Month::March, 2026).with_past_disabled(true);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert_eq!((ctl.selected_week(), ctl.selected_day()), (2, 4));
        assert_eq!(ctl.selected_date(), Some(date(2026, 3, 11)));
        assert!(ctl.set_week(3));
        assert!(!ctl.set_week(1));
        assert_eq!(ctl.selected_week(), 3);
        assert!(ctl.set_week(2));
        assert!(!ctl.set_day(3));
        assert!(ctl.set_day(5));
    }

    #[test]
    fn test_past_lock_in_earlier_month_uses_reference_slot() {
        let config = SlotConfig::new(Month::January, 2026).with_past_disabled(true);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert_eq!((ctl.selected_week(), ctl.selected_day()), (2, 4));
        assert!(!ctl.is_week_selectable(1));
        assert!(ctl.is_week_selectable(4));
        assert!(ctl.set_day(6));
    }

    #[test]
    fn test_past_lock_keeps_selection_when_reference_week_is_empty() {
        // Reference Sat May 30 2026 is week 5; February 2026 has four weeks
        let config = SlotConfig::new(Month::February, 2026)
            .with_past_disabled(true)
            .with_max_week(6);
        let ctl = SlotController::for_today(config, date(2026, 5, 30));
        assert_eq!(ctl.reference().week, 5);
        assert_eq!(ctl.selected_week(), 1);
        assert!(ctl.selected_date().is_some());
        assert!(!ctl.is_week_selectable(4));
    }

    // ── month-aware past lock ───────────────────────────────────────────

    #[test]
    fn test_month_aware_earlier_month_is_fully_locked() {
        let config = SlotConfig::new(Month::January, 2026)
            .with_past_disabled(true)
            .with_month_aware_past(true);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert!(ctl.policy().month_aware_past);
        assert!(!ctl.set_week(2));
        assert!(!ctl.set_day(6));
        assert!(!ctl.is_week_selectable(4));
    }

    #[test]
    fn test_month_aware_later_month_is_open() {
        let config = SlotConfig::new(Month::March, 2026)
            .with_past_disabled(true)
            .with_month_aware_past(true);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert_eq!((ctl.selected_week(), ctl.selected_day()), (1, 1));
        assert!(ctl.set_week(2));
        assert!(ctl.set_day(3));
        assert!(ctl.set_day(1));
    }

    #[test]
    fn test_month_aware_reference_month_matches_default() {
        let config = SlotConfig::new(Month::February, 2026)
            .with_past_disabled(true)
            .with_month_aware_past(true);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert_eq!((ctl.selected_week(), ctl.selected_day()), (2, 4));
        assert!(!ctl.set_week(1));
        assert!(!ctl.set_day(3));
    }

    // ── force-advance in the reference week ─────────────────────────────

    #[test]
    fn test_reference_week_advances_day_without_past_lock() {
        let config = SlotConfig::new(Month::February, 2026);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert_eq!(ctl.selected_week(), 1);
        ctl.set_day(2);
        assert!(ctl.set_week(2));
        assert_eq!(ctl.selected_day(), 4);
    }

    #[test]
    fn test_reference_week_day_can_be_lowered_without_past_lock() {
        let config = SlotConfig::new(Month::February, 2026);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        ctl.set_week(2);
        assert!(ctl.set_day(2));
        assert_eq!(ctl.selected_day(), 2);
    }

    #[test]
    fn test_reference_week_advance_applies_in_any_month() {
        let config = SlotConfig::new(Month::March, 2026);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        assert_eq!(ctl.selected_week(), 1);
        assert!(ctl.set_week(2));
        assert_eq!(ctl.selected_day(), 4);
        assert_eq!(ctl.selected_date(), Some(date(2026, 3, 11)));
    }

    #[test]
    fn test_reference_week_advance_keeps_day_when_none_remain() {
        // Reference Fri Jan 30 2026 is week 5, day 6; March week 5 ends on day 3
        let config = SlotConfig::new(Month::March, 2026).with_max_week(5);
        let mut ctl = SlotController::for_today(config, date(2026, 1, 30));
        assert_eq!((ctl.reference().week, ctl.reference().day), (5, 6));
        assert!(ctl.set_week(5));
        assert_eq!(ctl.selected_day(), 1);
        assert_eq!(ctl.selected_date(), Some(date(2026, 3, 29)));
    }

    #[test]
    fn test_month_aware_reference_week_advance_only_in_reference_month() {
        let config = SlotConfig::new(Month::March, 2026).with_month_aware_past(true);
        let mut ctl = SlotController::for_today(config, date(2026, 2, 11));
        ctl.set_week(2);
        assert_eq!(ctl.selected_day(), 1);
    }

    // ── set_month ───────────────────────────────────────────────────────

    #[test]
    fn test_set_month_recomputes_day() {
        let mut ctl =
            SlotController::new(SlotConfig::new(Month::February, 2026), open_reference());
        assert_eq!(ctl.selected_day(), 1);
        assert!(ctl.set_month(Month::January, 2026));
        assert_eq!(ctl.selected_day(), 5);
        assert_eq!(ctl.selected_date(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_set_month_falls_back_to_non_empty_week() {
        let config = SlotConfig::new(Month::August, 2026).with_max_week(6);
        let mut ctl = SlotController::new(config, open_reference());
        assert!(ctl.set_week(6));
        ctl.set_month(Month::February, 2026);
        assert_eq!(ctl.selected_week(), 4);
        assert!(ctl.selected_date().is_some());
    }

    // ── reducer ─────────────────────────────────────────────────────────

    #[test]
    fn test_reduce_is_pure() {
        let config = SlotConfig::new(Month::February, 2026)
            .with_options(SlotOptions::new(WeekStart::Monday));
        let policy = SlotPolicy::from(&config);
        let reference = open_reference();
        let ctx = SlotContext {
            policy: &policy,
            reference: &reference,
        };
        let start = normalize(SlotState::initial(Month::February, 2026), &ctx);
        // Monday-first: week 1 of Feb 2026 is only Sunday the 1st
        assert_eq!((start.week, start.day), (1, 7));

        let a = reduce(start, SlotAction::SetWeek(2), &ctx);
        let b = reduce(start, SlotAction::SetWeek(2), &ctx);
        assert_eq!(a, b);
        assert_eq!(start.week, 1);
        assert_eq!((a.week, a.day), (2, 7));
    }
}
