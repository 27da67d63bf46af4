//! Output formatting functions.

pub mod json;
pub mod pretty;

use chrono::NaiveDate;
use serde::Serialize;
use shiftboard_core::schedule::{DropTargetId, Scheduler, ScheduleView, ViewBody};

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Render the scheduler's current view.
pub fn render_view(state: &Scheduler, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => state.render(&json::JsonRenderer),
        OutputFormat::Pretty => state.render(&pretty::PrettyRenderer),
    }
}

/// A droppable cell of the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRow {
    pub target: DropTargetId,
    pub position_id: String,
    pub date: NaiveDate,
}

/// Collects the drop targets of a view.
///
/// Only the day and week views expose droppable cells.
pub fn collect_targets(view: &ScheduleView) -> Vec<TargetRow> {
    match &view.body {
        ViewBody::Day(sheet) => sheet
            .columns
            .iter()
            .map(|column| TargetRow {
                target: column.target.clone(),
                position_id: column.position.id.clone(),
                date: sheet.date,
            })
            .collect(),
        ViewBody::Week(grid) => grid
            .rows
            .iter()
            .flat_map(|row| {
                row.cells.iter().map(|cell| TargetRow {
                    target: cell.target.clone(),
                    position_id: row.position.id.clone(),
                    date: cell.date,
                })
            })
            .collect(),
        ViewBody::Month(_) | ViewBody::Year(_) => Vec::new(),
    }
}
