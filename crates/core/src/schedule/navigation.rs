//! Previous/next/today navigation of the reference date.
//!
//! Month and year steps clamp to the last valid day of the target month
//! (Jan 31 + 1 month = Feb 28) but the navigator remembers the day of month
//! the user started from, so stepping back lands on the original date again
//! (Jan 31 -> Feb 28 -> Jan 31).

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::types::{CycleLength, ViewMode};
use super::window::{compute_window, last_day_of_month, VisibleWindow};

/// Which way a prev/next command moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Moves `date` by `delta` months, landing on `preferred_day` or the last
/// day of the target month if it is shorter.
pub fn shift_months(date: NaiveDate, delta: i64, preferred_day: u32) -> Option<NaiveDate> {
    let total_months = i64::from(date.year()) * 12 + i64::from(date.month0()) + delta;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;
    let day = preferred_day.min(last_day_of_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Moves `date` by `delta` days.
pub fn shift_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let days = Days::new(delta.unsigned_abs());
    if delta < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
}

/// Owns the reference date, the view mode and the cycle length.
///
/// Every operation returns a new navigator; the shift collection is never
/// involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    reference: NaiveDate,
    mode: ViewMode,
    cycle: CycleLength,
    /// Day of month month/year steps aim for. Invariant:
    /// `reference.day() == min(preferred_day, last day of reference's month)`.
    preferred_day: u32,
}

impl Navigator {
    /// Creates a navigator anchored at `reference`.
    pub fn new(reference: NaiveDate, mode: ViewMode, cycle: CycleLength) -> Self {
        Self {
            reference,
            mode,
            cycle,
            preferred_day: reference.day(),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn cycle_length(&self) -> CycleLength {
        self.cycle
    }

    /// Derives the visible window for the current state.
    pub fn window(&self) -> VisibleWindow {
        compute_window(self.reference, self.mode, self.cycle)
    }

    /// Jumps to the clock's current date.
    pub fn today(self, clock: &impl Clock) -> Self {
        self.jump_to(clock.today())
    }

    /// Jumps to an arbitrary date, keeping the view mode.
    pub fn jump_to(self, date: NaiveDate) -> Self {
        Self::new(date, self.mode, self.cycle)
    }

    /// Moves one view-sized unit back.
    pub fn prev(self) -> Self {
        self.step(Direction::Backward)
    }

    /// Moves one view-sized unit forward.
    pub fn next(self) -> Self {
        self.step(Direction::Forward)
    }

    /// Changes the view mode without touching the reference date.
    pub fn set_view_mode(self, mode: ViewMode) -> Self {
        Self { mode, ..self }
    }

    /// Moves by one unit of the current view's granularity.
    ///
    /// Leaves the navigator unchanged if the step would leave chrono's
    /// representable date range.
    pub fn step(self, direction: Direction) -> Self {
        let sign = direction.sign();
        let moved = match self.mode {
            ViewMode::Day => shift_days(self.reference, sign).map(|date| self.jump_to(date)),
            ViewMode::Week => {
                shift_days(self.reference, sign * self.cycle.days()).map(|date| self.jump_to(date))
            }
            ViewMode::Month => shift_months(self.reference, sign, self.preferred_day)
                .map(|reference| Self { reference, ..self }),
            ViewMode::Year => shift_months(self.reference, sign * 12, self.preferred_day)
                .map(|reference| Self { reference, ..self }),
        };

        match moved {
            Some(navigator) => navigator,
            None => {
                tracing::warn!(
                    reference = %self.reference,
                    mode = %self.mode,
                    ?direction,
                    "Navigation step out of range, staying put"
                );
                self
            }
        }
    }
}
