//! Shift reassignment: turns a drop into a new shift collection.
//!
//! Reassignment never mutates the input snapshot. The result shares every
//! untouched shift with the input by `Arc`, replaces only the dragged shift,
//! and keeps the original order. Nothing is merged or removed.

use std::sync::Arc;

use super::collection::ShiftCollection;
use super::error::ReassignError;
use super::target::{decode, DropTarget};
use super::types::Shift;

/// Moves a shift onto an already decoded target.
///
/// Dropping a shift onto the cell it already occupies is allowed and yields
/// a value-equal collection.
pub fn move_shift(
    shifts: &ShiftCollection,
    shift_id: &str,
    target: &DropTarget,
) -> Result<ShiftCollection, ReassignError> {
    let index = shifts
        .index_of(shift_id)
        .ok_or_else(|| ReassignError::UnknownShift(shift_id.to_string()))?;

    let entries = shifts
        .entries()
        .iter()
        .enumerate()
        .map(|(i, shift)| {
            if i == index {
                Arc::new(Shift {
                    position_id: Some(target.position_id.clone()),
                    date: Some(target.date),
                    ..Shift::clone(shift)
                })
            } else {
                Arc::clone(shift)
            }
        })
        .collect();

    Ok(ShiftCollection::from_shared(entries))
}

/// Decodes `target_id` and moves the shift onto it.
pub fn try_reassign(
    shift_id: &str,
    target_id: &str,
    shifts: &ShiftCollection,
) -> Result<ShiftCollection, ReassignError> {
    let target = decode(target_id)?;
    move_shift(shifts, shift_id, &target)
}

/// Decodes `target_id` and moves the shift onto it, treating every failure
/// as a no-op.
///
/// A malformed target or a shift that no longer exists returns the input
/// snapshot unchanged. The user can simply drag again.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shiftboard_core::schedule::{reassign, Shift, ShiftCollection};
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
/// let shifts = ShiftCollection::new(vec![Shift::assigned("s1", "9-5", "p1", date)]).unwrap();
///
/// let moved = reassign("s1", "p1__2025-11-21", &shifts);
/// assert_eq!(moved.get("s1").unwrap().date, date.succ_opt());
///
/// let ignored = reassign("s9", "p1__2025-11-21", &shifts);
/// assert_eq!(ignored, shifts);
/// ```
pub fn reassign(shift_id: &str, target_id: &str, shifts: &ShiftCollection) -> ShiftCollection {
    match try_reassign(shift_id, target_id, shifts) {
        Ok(next) => {
            tracing::debug!(shift_id, target_id, "Shift reassigned");
            next
        }
        Err(error) => {
            tracing::warn!(shift_id, target_id, %error, "Ignoring drop");
            shifts.clone()
        }
    }
}
