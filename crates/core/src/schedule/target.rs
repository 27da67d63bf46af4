//! Drop target IDs: the wire contract between the gesture layer and the
//! reassignment engine.
//!
//! A drop target addresses one (position, date) cell and is encoded as
//! `"<positionId>__<yyyy-MM-dd>"`. Date keys never contain the delimiter, so
//! decoding only requires that position IDs never contain it either. Hosts
//! must not use `__` inside position IDs; [`encode`] and scheduler
//! construction reject such IDs.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::TargetIdError;

/// Reserved separator between the position ID and the date key.
pub const DROP_TARGET_DELIMITER: &str = "__";

/// chrono format of a date key (`yyyy-MM-dd`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A decoded drop target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub position_id: String,
    pub date: NaiveDate,
}

impl DropTarget {
    /// Creates a drop target for a cell.
    pub fn new(position_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            position_id: position_id.into(),
            date,
        }
    }

    /// Encodes this target into its wire ID.
    pub fn id(&self) -> Result<DropTargetId, TargetIdError> {
        encode(&self.position_id, self.date)
    }
}

/// An encoded drop target ID, guaranteed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DropTargetId(String);

impl DropTargetId {
    /// Builds an ID for a position already checked by [`validate_position_id`].
    pub(crate) fn for_cell(position_id: &str, date: NaiveDate) -> Self {
        Self(format!(
            "{position_id}{DROP_TARGET_DELIMITER}{}",
            format_date_key(date)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the ID back into its cell.
    pub fn decode(&self) -> Result<DropTarget, TargetIdError> {
        decode(&self.0)
    }
}

impl fmt::Display for DropTargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DropTargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DropTargetId {
    type Err = TargetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for DropTargetId {
    type Error = TargetIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        decode(&value)?;
        Ok(Self(value))
    }
}

impl From<DropTargetId> for String {
    fn from(id: DropTargetId) -> Self {
        id.0
    }
}

/// Formats a date as a `yyyy-MM-dd` key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `yyyy-MM-dd` key.
///
/// Only the zero-padded form [`format_date_key`] produces is accepted, so
/// every cell has exactly one key.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .ok()
        .filter(|date| format_date_key(*date) == key)
}

/// Checks that a position ID can be embedded in a drop target ID.
pub fn validate_position_id(position_id: &str) -> Result<(), TargetIdError> {
    if position_id.is_empty() {
        return Err(TargetIdError::EmptyPositionId);
    }
    if position_id.contains(DROP_TARGET_DELIMITER) {
        return Err(TargetIdError::ReservedDelimiter(position_id.to_string()));
    }
    Ok(())
}

/// Encodes a (position, date) cell into a drop target ID.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shiftboard_core::schedule::encode;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 21).unwrap();
/// assert_eq!(encode("p1", date).unwrap().as_str(), "p1__2025-11-21");
/// assert!(encode("p__1", date).is_err());
/// ```
pub fn encode(position_id: &str, date: NaiveDate) -> Result<DropTargetId, TargetIdError> {
    validate_position_id(position_id)?;
    Ok(DropTargetId::for_cell(position_id, date))
}

/// Decodes a drop target ID, splitting on the first delimiter.
///
/// Fails with [`TargetIdError::Malformed`] when the delimiter is missing,
/// the position part is empty, or the date key is not a valid date.
pub fn decode(target_id: &str) -> Result<DropTarget, TargetIdError> {
    let malformed = || TargetIdError::Malformed(target_id.to_string());

    let (position_id, date_key) = target_id
        .split_once(DROP_TARGET_DELIMITER)
        .ok_or_else(malformed)?;
    if position_id.is_empty() {
        return Err(malformed());
    }
    let date = parse_date_key(date_key).ok_or_else(malformed)?;

    Ok(DropTarget::new(position_id, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_encode() {
        let id = encode("p1", make_date(2025, 11, 21)).unwrap();

        assert_eq!(id.as_str(), "p1__2025-11-21");
        assert_eq!(id.to_string(), "p1__2025-11-21");
    }

    #[test]
    fn test_encode_pads_date_key() {
        let id = encode("kitchen", make_date(2025, 1, 5)).unwrap();

        assert_eq!(id.as_str(), "kitchen__2025-01-05");
    }

    #[test]
    fn test_encode_rejects_reserved_delimiter() {
        assert_eq!(
            encode("front__desk", make_date(2025, 1, 5)),
            Err(TargetIdError::ReservedDelimiter("front__desk".to_string()))
        );
    }

    #[test]
    fn test_encode_allows_single_underscore() {
        let id = encode("front_desk", make_date(2025, 1, 5)).unwrap();

        assert_eq!(
            id.decode(),
            Ok(DropTarget::new("front_desk", make_date(2025, 1, 5)))
        );
    }

    #[test]
    fn test_encode_rejects_empty_position() {
        assert_eq!(
            encode("", make_date(2025, 1, 5)),
            Err(TargetIdError::EmptyPositionId)
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            decode("p1__2025-11-21"),
            Ok(DropTarget::new("p1", make_date(2025, 11, 21)))
        );
    }

    #[test]
    fn test_decode_missing_delimiter() {
        assert_eq!(
            decode("p1-2025-11-21"),
            Err(TargetIdError::Malformed("p1-2025-11-21".to_string()))
        );
    }

    #[test]
    fn test_decode_splits_on_first_delimiter() {
        // Everything after the first delimiter is the date key, which is invalid here.
        assert!(matches!(
            decode("a__b__2025-11-21"),
            Err(TargetIdError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_parts() {
        assert!(decode("__2025-11-21").is_err());
        assert!(decode("p1__").is_err());
        assert!(decode("p1__2025-02-30").is_err());
        assert!(decode("p1__tomorrow").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn test_decode_rejects_unpadded_date_key() {
        for id in ["p1__2025-1-5", "p1__2025-01-5", "p1__2025-1-05", "p1__ 2025-01-05"] {
            assert_eq!(decode(id), Err(TargetIdError::Malformed(id.to_string())));
        }
        assert!(decode("p1__2025-01-05").is_ok());
    }

    #[test]
    fn test_target_id_from_str_validates() {
        assert!("p1__2025-11-21".parse::<DropTargetId>().is_ok());
        assert!("p1".parse::<DropTargetId>().is_err());
    }

    #[test]
    fn test_target_id_serde() {
        let id = encode("p2", make_date(2025, 11, 21)).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p2__2025-11-21\"");

        let back: DropTargetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<DropTargetId>("\"garbage\"").is_err());
    }

    #[test]
    fn test_drop_target_id() {
        let target = DropTarget::new("p3", make_date(2025, 11, 22));

        assert_eq!(target.id().unwrap().as_str(), "p3__2025-11-22");
    }

    #[test]
    fn test_date_key_helpers() {
        let date = make_date(2025, 11, 20);

        assert_eq!(format_date_key(date), "2025-11-20");
        assert_eq!(parse_date_key("2025-11-20"), Some(date));
        assert_eq!(parse_date_key("20/11/2025"), None);
        assert_eq!(parse_date_key("2025-11-5"), None);
    }
}
