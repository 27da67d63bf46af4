use thiserror::Error;

/// Errors raised while building a scheduler from host-supplied inputs.
///
/// These indicate an integration bug in the host, so construction fails
/// instead of degrading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid cycle length: {0} (must be between 1 and 366 days)")]
    InvalidCycleLength(i64),
    #[error("Position ID cannot be empty")]
    EmptyPositionId,
    #[error("Duplicate position ID: {0}")]
    DuplicatePositionId(String),
    #[error("Position ID {0:?} contains the reserved drop target delimiter")]
    ReservedDelimiter(String),
    #[error("Shift ID cannot be empty")]
    EmptyShiftId,
    #[error("Duplicate shift ID: {0}")]
    DuplicateShiftId(String),
}

/// Errors that can occur when encoding or decoding a drop target ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetIdError {
    #[error("Malformed drop target ID: {0:?}")]
    Malformed(String),
    #[error("Position ID cannot be empty")]
    EmptyPositionId,
    #[error("Position ID {0:?} contains the reserved drop target delimiter")]
    ReservedDelimiter(String),
}

/// Errors that can occur on the reassignment path.
///
/// [`super::reassign`] absorbs these into a no-op; [`super::try_reassign`]
/// surfaces them for callers that want to report why a drop was ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReassignError {
    #[error("Malformed drop target: {0}")]
    MalformedTargetId(#[from] TargetIdError),
    #[error("Unknown shift: {0}")]
    UnknownShift(String),
}

/// Errors that can occur when parsing a view mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewModeError {
    #[error("Unknown view mode: {0:?} (expected day, week, month or year)")]
    Unknown(String),
}
