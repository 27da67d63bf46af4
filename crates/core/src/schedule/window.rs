//! Visible-window derivation for each view mode.
//!
//! All functions here are pure: the window depends only on the reference
//! date, the view mode and the cycle length, never on the wall clock.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use super::range::DateRange;
use super::types::{CycleLength, ViewMode};

/// The weekday every week window and month grid row starts on.
pub const WEEK_START: Weekday = Weekday::Mon;

/// Number of cells in a month grid (six rows of seven days).
pub const MONTH_GRID_CELLS: usize = 42;

/// Number of columns in a month grid.
pub const DAYS_PER_WEEK: usize = 7;

/// The ordered dates currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleWindow {
    mode: ViewMode,
    dates: Vec<NaiveDate>,
    bounds: DateRange,
}

impl VisibleWindow {
    /// The view mode this window was derived for.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The window's dates, ascending.
    ///
    /// For the year view these are the twelve first-of-month dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The inclusive span of days covered by the window.
    ///
    /// For the year view this is January 1st through December 31st, not just
    /// the first-of-month anchors.
    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    /// Returns the number of dates in the window.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the window has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns true if the date falls within the window's bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds.contains(date)
    }
}

/// Computes the visible window for a reference date and view mode.
pub fn compute_window(reference: NaiveDate, mode: ViewMode, cycle: CycleLength) -> VisibleWindow {
    let dates = match mode {
        ViewMode::Day => vec![reference],
        ViewMode::Week => week_dates(reference, cycle),
        ViewMode::Month => month_dates(reference),
        ViewMode::Year => year_months(reference),
    };

    let bounds = match mode {
        ViewMode::Year => DateRange::year(reference.year()),
        ViewMode::Month => DateRange::month(reference.year(), reference.month()),
        _ => match (dates.first(), dates.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                start: *first,
                end: *last,
            }),
            _ => None,
        },
    }
    .unwrap_or_else(|| DateRange::single(reference));

    VisibleWindow {
        mode,
        dates,
        bounds,
    }
}

/// Returns the most recent [`WEEK_START`] on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - WEEK_START.num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns `cycle` consecutive dates starting at the week start of `reference`.
pub fn week_dates(reference: NaiveDate, cycle: CycleLength) -> Vec<NaiveDate> {
    week_start(reference)
        .iter_days()
        .take(cycle.get() as usize)
        .collect()
}

/// Returns every date of the calendar month containing `reference`.
pub fn month_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .collect()
}

/// Returns the twelve first-of-month dates of `reference`'s year.
pub fn year_months(reference: NaiveDate) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(reference.year(), month, 1))
        .collect()
}

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the number of the last day in the given month (28-31).
///
/// Returns `None` for an invalid month or a year outside chrono's range.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };

    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_of_next) => first_of_next.pred_opt().map(|date| date.day()),
        // December of the last representable year.
        None if month == 12 => NaiveDate::from_ymd_opt(year, 12, 31).map(|_| 31),
        None => None,
    }
}

/// One slot of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for the leading and trailing days borrowed from adjacent months.
    pub in_month: bool,
}

/// A six-week grid for rendering a month, aligned to [`WEEK_START`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month_start: NaiveDate,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Returns the grid split into rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Returns only the cells belonging to the displayed month.
    pub fn month_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| cell.in_month)
    }
}

/// Builds the 42-cell grid for the month containing `reference`.
///
/// The first cell is the week start on or before the 1st of the month, so
/// the grid lines up with the week view. Six rows always fit a month: the
/// longest month plus the largest leading offset is 37 cells.
pub fn month_grid(reference: NaiveDate) -> MonthGrid {
    let month_start = first_of_month(reference);
    let cells = week_start(month_start)
        .iter_days()
        .take(MONTH_GRID_CELLS)
        .map(|date| GridCell {
            date,
            in_month: date.year() == month_start.year() && date.month() == month_start.month(),
        })
        .collect();

    MonthGrid { month_start, cells }
}
