//! View models handed to the rendering layer.
//!
//! These are plain data: the renderer decides how a week row or a month cell
//! looks, the scheduler only decides what is in it.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::collection::ShiftCollection;
use super::operations::{count_shifts_in_month, shifts_in_cell, shifts_on_date};
use super::range::DateRange;
use super::target::DropTargetId;
use super::types::{Position, Shift, ViewMode};
use super::window::{month_grid, VisibleWindow};

/// Number of hour slots in the day view.
pub const HOURS_PER_DAY: u32 = 24;

/// Column headers of the month grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Presentation collaborator seam.
///
/// Implementors turn a [`ScheduleView`] into whatever their platform draws;
/// the scheduler never inspects the output.
pub trait Render {
    type Output;

    fn render(&self, view: &ScheduleView) -> Self::Output;
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    pub mode: ViewMode,
    /// Header text, e.g. "17 Nov 2025 - 23 Nov 2025".
    pub title: String,
    pub tabs: Vec<ViewTab>,
    /// Inclusive span of days on screen.
    pub bounds: DateRange,
    pub body: ViewBody,
}

/// One entry of the view-mode tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTab {
    pub mode: ViewMode,
    pub label: &'static str,
    pub active: bool,
}

/// The presentation variant selected by the current view mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewBody {
    Day(DaySheet),
    Week(WeekGrid),
    Month(MonthSheet),
    Year(YearSheet),
}

/// Day view: one column per position with hourly slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySheet {
    pub date: NaiveDate,
    /// Slot labels, "00:00" through "23:00".
    pub hours: Vec<String>,
    pub columns: Vec<PositionColumn>,
}

/// A position's column in the day view.
///
/// Every hour slot of the column drops onto the same `(position, date)`
/// target; shifts carry no time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionColumn {
    pub position: Position,
    pub target: DropTargetId,
    pub shifts: Vec<Shift>,
}

/// Week view: positions down, window dates across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    pub days: Vec<DayHeader>,
    pub rows: Vec<PositionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHeader {
    pub date: NaiveDate,
    /// Short weekday, e.g. "Thu".
    pub weekday: String,
    /// Short date, e.g. "20 Nov".
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionRow {
    pub position: Position,
    pub cells: Vec<ShiftCell>,
}

/// A droppable (position, date) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftCell {
    pub date: NaiveDate,
    pub target: DropTargetId,
    pub shifts: Vec<Shift>,
}

/// Month view: a six-week grid aligned to the week start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSheet {
    pub month_start: NaiveDate,
    pub weekdays: Vec<&'static str>,
    pub weeks: Vec<Vec<MonthCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub day: u32,
    pub in_month: bool,
    /// Shifts on this date across all positions.
    pub shifts: Vec<Shift>,
}

/// Year view: per-month shift counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSheet {
    pub year: i32,
    pub months: Vec<MonthSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month_start: NaiveDate,
    /// Full month name, e.g. "January".
    pub name: String,
    pub shift_count: usize,
}

/// Builds the view for a window.
///
/// Position IDs must already be validated; the scheduler checks them at
/// construction.
pub(crate) fn build_view(
    window: &VisibleWindow,
    positions: &[Position],
    shifts: &ShiftCollection,
) -> ScheduleView {
    let mode = window.mode();
    let bounds = window.bounds();

    let body = match mode {
        ViewMode::Day => ViewBody::Day(day_sheet(bounds.start, positions, shifts)),
        ViewMode::Week => ViewBody::Week(week_grid(window.dates(), positions, shifts)),
        ViewMode::Month => ViewBody::Month(month_sheet(bounds.start, shifts)),
        ViewMode::Year => ViewBody::Year(year_sheet(window.dates(), shifts)),
    };

    ScheduleView {
        mode,
        title: window_title(window),
        tabs: ViewMode::ALL
            .iter()
            .map(|tab| ViewTab {
                mode: *tab,
                label: tab.label(),
                active: *tab == mode,
            })
            .collect(),
        bounds,
        body,
    }
}

/// Formats the header title for a window.
pub fn window_title(window: &VisibleWindow) -> String {
    let bounds = window.bounds();
    match window.mode() {
        ViewMode::Day => bounds.start.format("%a, %-d %b %Y").to_string(),
        ViewMode::Week => format!(
            "{} - {}",
            bounds.start.format("%-d %b %Y"),
            bounds.end.format("%-d %b %Y")
        ),
        ViewMode::Month => bounds.start.format("%B %Y").to_string(),
        ViewMode::Year => bounds.start.year().to_string(),
    }
}

fn owned(shifts: Vec<&Shift>) -> Vec<Shift> {
    shifts.into_iter().cloned().collect()
}

fn day_sheet(date: NaiveDate, positions: &[Position], shifts: &ShiftCollection) -> DaySheet {
    DaySheet {
        date,
        hours: (0..HOURS_PER_DAY).map(|hour| format!("{hour:02}:00")).collect(),
        columns: positions
            .iter()
            .map(|position| PositionColumn {
                position: position.clone(),
                target: DropTargetId::for_cell(&position.id, date),
                shifts: owned(shifts_in_cell(shifts.iter(), &position.id, date)),
            })
            .collect(),
    }
}

fn week_grid(dates: &[NaiveDate], positions: &[Position], shifts: &ShiftCollection) -> WeekGrid {
    WeekGrid {
        days: dates
            .iter()
            .map(|date| DayHeader {
                date: *date,
                weekday: date.format("%a").to_string(),
                label: date.format("%-d %b").to_string(),
            })
            .collect(),
        rows: positions
            .iter()
            .map(|position| PositionRow {
                position: position.clone(),
                cells: dates
                    .iter()
                    .map(|date| ShiftCell {
                        date: *date,
                        target: DropTargetId::for_cell(&position.id, *date),
                        shifts: owned(shifts_in_cell(shifts.iter(), &position.id, *date)),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn month_sheet(reference: NaiveDate, shifts: &ShiftCollection) -> MonthSheet {
    let grid = month_grid(reference);

    MonthSheet {
        month_start: grid.month_start,
        weekdays: WEEKDAY_LABELS.to_vec(),
        weeks: grid
            .weeks()
            .map(|week| {
                week.iter()
                    .map(|cell| MonthCell {
                        date: cell.date,
                        day: cell.date.day(),
                        in_month: cell.in_month,
                        shifts: owned(shifts_on_date(shifts.iter(), cell.date)),
                    })
                    .collect()
            })
            .collect(),
    }
}

fn year_sheet(months: &[NaiveDate], shifts: &ShiftCollection) -> YearSheet {
    YearSheet {
        year: months.first().map(|month| month.year()).unwrap_or_default(),
        months: months
            .iter()
            .map(|month_start| MonthSummary {
                month_start: *month_start,
                name: month_start.format("%B").to_string(),
                shift_count: count_shifts_in_month(
                    shifts.iter(),
                    month_start.year(),
                    month_start.month(),
                ),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::CycleLength;
    use crate::schedule::window::compute_window;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn positions() -> Vec<Position> {
        vec![Position::new("p1", "Cashier"), Position::new("p2", "Kitchen")]
    }

    fn shifts() -> ShiftCollection {
        ShiftCollection::new(vec![
            Shift::assigned("s1", "9am - 5pm", "p1", make_date(2025, 11, 20)),
            Shift::assigned("s2", "10am - 6pm", "p2", make_date(2025, 11, 21)),
            Shift::assigned("s3", "Inventory", "p2", make_date(2025, 12, 2)),
            Shift::unassigned("s4", "Floater"),
        ])
        .unwrap()
    }

    fn view(mode: ViewMode) -> ScheduleView {
        let window = compute_window(make_date(2025, 11, 20), mode, CycleLength::WEEK);
        build_view(&window, &positions(), &shifts())
    }

    #[test]
    fn test_titles() {
        assert_eq!(view(ViewMode::Day).title, "Thu, 20 Nov 2025");
        assert_eq!(view(ViewMode::Week).title, "17 Nov 2025 - 23 Nov 2025");
        assert_eq!(view(ViewMode::Month).title, "November 2025");
        assert_eq!(view(ViewMode::Year).title, "2025");
    }

    #[test]
    fn test_tabs_flag_active_mode() {
        let tabs = view(ViewMode::Month).tabs;

        assert_eq!(tabs.len(), 4);
        let active: Vec<ViewMode> = tabs.iter().filter(|t| t.active).map(|t| t.mode).collect();
        assert_eq!(active, vec![ViewMode::Month]);
        assert_eq!(tabs[2].label, "MONTH");
    }

    #[test]
    fn test_day_sheet() {
        let ViewBody::Day(sheet) = view(ViewMode::Day).body else {
            panic!("expected day body");
        };

        assert_eq!(sheet.hours.len(), 24);
        assert_eq!(sheet.hours[0], "00:00");
        assert_eq!(sheet.hours[23], "23:00");
        assert_eq!(sheet.columns.len(), 2);
        assert_eq!(sheet.columns[0].target.as_str(), "p1__2025-11-20");
        assert_eq!(sheet.columns[0].shifts.len(), 1);
        assert!(sheet.columns[1].shifts.is_empty());
    }

    #[test]
    fn test_week_grid() {
        let ViewBody::Week(grid) = view(ViewMode::Week).body else {
            panic!("expected week body");
        };

        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.days[0].weekday, "Mon");
        assert_eq!(grid.days[0].label, "17 Nov");
        assert_eq!(grid.rows.len(), 2);

        let kitchen = &grid.rows[1];
        assert_eq!(kitchen.position.name, "Kitchen");
        assert_eq!(kitchen.cells[4].target.as_str(), "p2__2025-11-21");
        assert_eq!(kitchen.cells[4].shifts[0].id, "s2");
        assert_eq!(
            grid.rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .map(|cell| cell.shifts.len())
                .sum::<usize>(),
            2
        );
    }

    #[test]
    fn test_month_sheet() {
        let ViewBody::Month(sheet) = view(ViewMode::Month).body else {
            panic!("expected month body");
        };

        assert_eq!(sheet.weeks.len(), 6);
        assert!(sheet.weeks.iter().all(|week| week.len() == 7));
        assert_eq!(sheet.weekdays[0], "Mon");

        let cells: Vec<&MonthCell> = sheet.weeks.iter().flatten().collect();
        let nov_20 = cells
            .iter()
            .find(|cell| cell.date == make_date(2025, 11, 20))
            .unwrap();
        assert!(nov_20.in_month);
        assert_eq!(nov_20.day, 20);
        assert_eq!(nov_20.shifts[0].id, "s1");

        // Dec 2 is a trailing cell but still shows its shift.
        let dec_2 = cells
            .iter()
            .find(|cell| cell.date == make_date(2025, 12, 2))
            .unwrap();
        assert!(!dec_2.in_month);
        assert_eq!(dec_2.shifts.len(), 1);
    }

    #[test]
    fn test_year_sheet() {
        let ViewBody::Year(sheet) = view(ViewMode::Year).body else {
            panic!("expected year body");
        };

        assert_eq!(sheet.year, 2025);
        assert_eq!(sheet.months.len(), 12);
        assert_eq!(sheet.months[0].name, "January");
        assert_eq!(sheet.months[10].shift_count, 2);
        assert_eq!(sheet.months[11].shift_count, 1);
        assert_eq!(sheet.months[0].shift_count, 0);
    }

    #[test]
    fn test_view_serializes_body_kind() {
        let json = serde_json::to_value(view(ViewMode::Week)).unwrap();

        assert_eq!(json["mode"], "week");
        assert_eq!(json["body"]["kind"], "week");
        assert_eq!(
            json["body"]["rows"][0]["cells"][3]["target"],
            "p1__2025-11-20"
        );
    }
}
