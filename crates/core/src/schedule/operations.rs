use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use super::error::{ConfigError, TargetIdError};
use super::range::DateRange;
use super::target::validate_position_id;
use super::types::{Position, Shift};

/// Validates the host's position list before construction.
///
/// IDs must be non-empty, unique, and free of the drop target delimiter.
pub fn validate_positions(positions: &[Position]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for position in positions {
        validate_position_id(&position.id).map_err(|err| match err {
            TargetIdError::ReservedDelimiter(id) => ConfigError::ReservedDelimiter(id),
            _ => ConfigError::EmptyPositionId,
        })?;
        if !seen.insert(position.id.as_str()) {
            return Err(ConfigError::DuplicatePositionId(position.id.clone()));
        }
    }

    Ok(())
}

/// Returns the shifts sitting in a single (position, date) cell.
pub fn shifts_in_cell<'a>(
    shifts: impl IntoIterator<Item = &'a Shift>,
    position_id: &str,
    date: NaiveDate,
) -> Vec<&'a Shift> {
    shifts
        .into_iter()
        .filter(|shift| shift.occupies(position_id, date))
        .collect()
}

/// Returns the assigned shifts on a date, whatever their position.
pub fn shifts_on_date<'a>(
    shifts: impl IntoIterator<Item = &'a Shift>,
    date: NaiveDate,
) -> Vec<&'a Shift> {
    shifts
        .into_iter()
        .filter(|shift| shift.position_id.is_some() && shift.date == Some(date))
        .collect()
}

/// Returns the assigned shifts whose date falls inside the range.
///
/// This is how the presentation layer asks for the shifts of a window.
pub fn shifts_in_range<'a>(
    shifts: impl IntoIterator<Item = &'a Shift>,
    range: DateRange,
) -> Vec<&'a Shift> {
    shifts
        .into_iter()
        .filter(|shift| {
            shift.position_id.is_some() && shift.date.is_some_and(|date| range.contains(date))
        })
        .collect()
}

/// Counts the dated shifts in a calendar month.
///
/// Only the date matters here: a dated shift without a position still counts
/// towards its month.
pub fn count_shifts_in_month<'a>(
    shifts: impl IntoIterator<Item = &'a Shift>,
    year: i32,
    month: u32,
) -> usize {
    shifts
        .into_iter()
        .filter(|shift| {
            shift
                .date
                .is_some_and(|date| date.year() == year && date.month() == month)
        })
        .count()
}
