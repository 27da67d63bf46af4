//! Pretty output formatting.

use shiftboard_core::schedule::{
    format_date_key, DaySheet, MonthSheet, Render, ScheduleView, Shift, ViewBody, ViewTab,
    VisibleWindow, WeekGrid, YearSheet,
};

use super::TargetRow;
use crate::replay::{describe, ReplayStep};

/// Renders views as plain text for the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyRenderer;

impl Render for PrettyRenderer {
    type Output = String;

    fn render(&self, view: &ScheduleView) -> String {
        let mut output = format!("{}\n{}\n", view.title, format_tabs(&view.tabs));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        let body = match &view.body {
            ViewBody::Day(sheet) => format_day(sheet),
            ViewBody::Week(grid) => format_week(grid),
            ViewBody::Month(sheet) => format_month(sheet),
            ViewBody::Year(sheet) => format_year(sheet),
        };
        output.push_str(&body);
        output
    }
}

/// Format the view mode tabs, bracketing the active one.
pub fn format_tabs(tabs: &[ViewTab]) -> String {
    tabs.iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                tab.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a shift for display.
pub fn format_shift(shift: &Shift) -> String {
    format!("{} ({})", shift.label, shift.id)
}

fn format_shifts(shifts: &[Shift]) -> String {
    if shifts.is_empty() {
        return "-".to_string();
    }
    shifts
        .iter()
        .map(format_shift)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_day(sheet: &DaySheet) -> String {
    if sheet.columns.is_empty() {
        return "No positions.\n".to_string();
    }
    let mut output = String::new();
    for column in &sheet.columns {
        output.push_str(&format!(
            "{}\n  {}\n",
            column.position.name,
            format_shifts(&column.shifts)
        ));
    }
    output
}

fn format_week(grid: &WeekGrid) -> String {
    if grid.rows.is_empty() {
        return "No positions.\n".to_string();
    }
    let mut output = String::new();
    for row in &grid.rows {
        output.push_str(&format!("{}\n", row.position.name));
        for (header, cell) in grid.days.iter().zip(&row.cells) {
            output.push_str(&format!(
                "  {} {:<7} {}\n",
                header.weekday,
                header.label,
                format_shifts(&cell.shifts)
            ));
        }
    }
    output
}

/// Month grid with a `*` after days that have shifts.
fn format_month(sheet: &MonthSheet) -> String {
    let mut output = sheet
        .weekdays
        .iter()
        .map(|weekday| format!("{weekday:>4}"))
        .collect::<String>();
    output.push('\n');

    for week in &sheet.weeks {
        for cell in week {
            if cell.in_month {
                let marker = if cell.shifts.is_empty() { ' ' } else { '*' };
                output.push_str(&format!("{:>3}{marker}", cell.day));
            } else {
                output.push_str("    ");
            }
        }
        output.push('\n');
    }
    output
}

fn format_year(sheet: &YearSheet) -> String {
    let mut output = String::new();
    for month in &sheet.months {
        let noun = if month.shift_count == 1 { "shift" } else { "shifts" };
        output.push_str(&format!(
            "{:<10} {:>3} {noun}\n",
            month.name, month.shift_count
        ));
    }
    output
}

/// Format the visible window's dates.
pub fn format_window(window: &VisibleWindow) -> String {
    let bounds = window.bounds();
    let mut output = format!(
        "{} ({} dates, {} .. {})\n",
        window.mode(),
        window.len(),
        format_date_key(bounds.start),
        format_date_key(bounds.end)
    );
    for date in window.dates() {
        output.push_str(&format!("  {}\n", date.format("%a %Y-%m-%d")));
    }
    output
}

/// Format drop targets for display.
pub fn format_targets(targets: &[TargetRow]) -> String {
    if targets.is_empty() {
        return "No drop targets in this view.".to_string();
    }
    let mut output = format!("TARGETS ({})\n", targets.len());
    output.push_str(&"-".repeat(40));
    for row in targets {
        output.push_str(&format!("\n{}", row.target));
    }
    output
}

/// Format one replayed command.
pub fn format_step(step: &ReplayStep) -> String {
    let mut output = format!(
        "#{} {} -> {} {}",
        step.index + 1,
        describe(&step.command),
        step.view,
        format_date_key(step.reference)
    );
    if step.shifts_changed {
        output.push_str(" (shifts updated)");
    }
    output
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftboard_core::schedule::{
        compute_window, demo_positions, demo_shifts, Command, CycleLength, FixedClock, Scheduler,
        SchedulerOptions, ViewMode,
    };

    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn demo_state(view: ViewMode) -> Scheduler {
        Scheduler::new(
            demo_positions(),
            demo_shifts(),
            SchedulerOptions::default().with_initial_view(view),
            &FixedClock::new(make_date(2025, 11, 20)),
        )
        .unwrap()
    }

    #[test]
    fn test_render_week() {
        let output = demo_state(ViewMode::Week).render(&PrettyRenderer);

        assert!(output.starts_with("17 Nov 2025 - 23 Nov 2025\nDAY  [WEEK]  MONTH  YEAR\n"));
        assert!(output.contains("Cashier\n"));
        assert!(output.contains("  Thu 20 Nov  9am - 5pm (s1)\n"));
        assert!(output.contains("  Fri 21 Nov  10am - 6pm (s2)\n"));
    }

    #[test]
    fn test_render_day() {
        let output = demo_state(ViewMode::Day).render(&PrettyRenderer);

        assert!(output.starts_with("Thu, 20 Nov 2025\n"));
        assert!(output.contains("Cashier\n  9am - 5pm (s1)\n"));
        assert!(output.contains("Kitchen\n  -\n"));
    }

    #[test]
    fn test_render_month_marks_busy_days() {
        let output = demo_state(ViewMode::Month).render(&PrettyRenderer);

        assert!(output.contains(" Mon Tue Wed Thu Fri Sat Sun\n"));
        assert!(output.contains(" 20* 21* 22 "));
    }

    #[test]
    fn test_render_year() {
        let output = demo_state(ViewMode::Year).render(&PrettyRenderer);

        assert!(output.contains("November     2 shifts\n"));
        assert!(output.contains("January      0 shifts\n"));
    }

    #[test]
    fn test_format_window() {
        let window = compute_window(make_date(2025, 11, 20), ViewMode::Week, CycleLength::WEEK);
        let output = format_window(&window);

        assert!(output.starts_with("week (7 dates, 2025-11-17 .. 2025-11-23)\n"));
        assert!(output.contains("  Thu 2025-11-20\n"));
    }

    #[test]
    fn test_format_targets_empty() {
        assert_eq!(format_targets(&[]), "No drop targets in this view.");
    }

    #[test]
    fn test_format_step() {
        let step = ReplayStep {
            index: 0,
            command: Command::Next,
            reference: make_date(2025, 11, 27),
            view: ViewMode::Week,
            shifts_changed: false,
        };

        assert_eq!(format_step(&step), "#1 next -> week 2025-11-27");
    }
}
