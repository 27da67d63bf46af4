use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ConfigError;
use super::types::Shift;

/// The scheduler's working set of shifts.
///
/// The collection is an immutable snapshot: every reassignment builds a new
/// collection that shares the untouched shifts with the previous one.
/// Readers holding an older snapshot keep seeing a complete, consistent list.
#[derive(Debug, Clone, Default)]
pub struct ShiftCollection {
    shifts: Arc<Vec<Arc<Shift>>>,
}

impl ShiftCollection {
    /// Builds a collection from the host's seed shifts.
    ///
    /// Shift IDs must be non-empty and unique; order is preserved.
    pub fn new(shifts: impl IntoIterator<Item = Shift>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for shift in shifts {
            if shift.id.trim().is_empty() {
                return Err(ConfigError::EmptyShiftId);
            }
            if !seen.insert(shift.id.clone()) {
                return Err(ConfigError::DuplicateShiftId(shift.id));
            }
            entries.push(Arc::new(shift));
        }

        Ok(Self::from_shared(entries))
    }

    pub(crate) fn from_shared(entries: Vec<Arc<Shift>>) -> Self {
        Self {
            shifts: Arc::new(entries),
        }
    }

    /// Returns the number of shifts.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if there are no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Iterates over the shifts in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter().map(|shift| shift.as_ref())
    }

    /// Looks up a shift by ID.
    pub fn get(&self, shift_id: &str) -> Option<&Shift> {
        self.iter().find(|shift| shift.id == shift_id)
    }

    /// Returns the index of the shift with the given ID.
    pub fn index_of(&self, shift_id: &str) -> Option<usize> {
        self.shifts.iter().position(|shift| shift.id == shift_id)
    }

    /// Returns the shared handles backing this snapshot.
    pub fn entries(&self) -> &[Arc<Shift>] {
        &self.shifts
    }

    /// Returns true if both snapshots are the very same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shifts, &other.shifts)
    }

    /// Copies the shifts out of the snapshot.
    pub fn to_vec(&self) -> Vec<Shift> {
        self.iter().cloned().collect()
    }
}

impl PartialEq for ShiftCollection {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl Eq for ShiftCollection {}

impl Serialize for ShiftCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ShiftCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let shifts = Vec::<Shift>::deserialize(deserializer)?;
        Self::new(shifts).map_err(serde::de::Error::custom)
    }
}
