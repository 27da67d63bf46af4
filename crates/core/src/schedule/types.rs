use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ViewModeError};

/// A staffed role that shifts are assigned to (e.g. "Cashier").
///
/// Positions are reference data owned by the host; the scheduler never
/// changes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub name: String,
}

impl Position {
    /// Creates a new position.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A work shift, optionally placed on a (position, date) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub position_id: Option<String>,
    /// The day this shift is worked on.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_date"
    )]
    pub date: Option<NaiveDate>,
    /// Free-form display text (e.g. "9am - 5pm").
    pub label: String,
}

impl Shift {
    /// Creates a shift that is not placed on any cell yet.
    pub fn unassigned(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position_id: None,
            date: None,
            label: label.into(),
        }
    }

    /// Creates a shift placed on the given position and date.
    pub fn assigned(
        id: impl Into<String>,
        label: impl Into<String>,
        position_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            position_id: Some(position_id.into()),
            date: Some(date),
            label: label.into(),
        }
    }

    /// Sets the position for this shift.
    pub fn with_position(mut self, position_id: impl Into<String>) -> Self {
        self.position_id = Some(position_id.into());
        self
    }

    /// Sets the date for this shift.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns true if the shift has both a position and a date.
    pub fn is_assigned(&self) -> bool {
        self.position_id.is_some() && self.date.is_some()
    }

    /// Returns true if the shift sits in the given cell.
    pub fn occupies(&self, position_id: &str, date: NaiveDate) -> bool {
        self.position_id.as_deref() == Some(position_id) && self.date == Some(date)
    }
}

/// The granularity the scheduler is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl ViewMode {
    /// Every view mode, in tab order.
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Day,
        ViewMode::Week,
        ViewMode::Month,
        ViewMode::Year,
    ];

    /// Returns the lowercase identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
        }
    }

    /// Returns the tab label for this view mode.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Day => "DAY",
            ViewMode::Week => "WEEK",
            ViewMode::Month => "MONTH",
            ViewMode::Year => "YEAR",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "year" => Ok(ViewMode::Year),
            _ => Err(ViewModeError::Unknown(s.to_string())),
        }
    }
}

/// Number of days shown by the week view, between 1 and 366.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CycleLength(u32);

impl CycleLength {
    /// The standard seven-day week.
    pub const WEEK: CycleLength = CycleLength(7);

    /// Longest accepted cycle, one leap year of days.
    pub const MAX_DAYS: u32 = 366;

    /// Creates a cycle length, rejecting values outside `1..=MAX_DAYS`.
    pub fn new(days: i64) -> Result<Self, ConfigError> {
        u32::try_from(days)
            .ok()
            .filter(|days| (1..=Self::MAX_DAYS).contains(days))
            .map(Self)
            .ok_or(ConfigError::InvalidCycleLength(days))
    }

    /// Returns the number of days as an unsigned count.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns the number of days as a signed offset for date arithmetic.
    pub fn days(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self::WEEK
    }
}

impl TryFrom<i64> for CycleLength {
    type Error = ConfigError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<CycleLength> for i64 {
    fn from(cycle: CycleLength) -> Self {
        cycle.days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_shift_builders() {
        let shift = Shift::unassigned("s1", "9am - 5pm")
            .with_position("p1")
            .with_date(make_date(2025, 11, 20));

        assert_eq!(shift.position_id.as_deref(), Some("p1"));
        assert_eq!(shift.date, Some(make_date(2025, 11, 20)));
        assert!(shift.is_assigned());
        assert!(shift.occupies("p1", make_date(2025, 11, 20)));
        assert!(!shift.occupies("p1", make_date(2025, 11, 21)));
        assert!(!shift.occupies("p2", make_date(2025, 11, 20)));
    }

    #[test]
    fn test_unassigned_shift_occupies_nothing() {
        let shift = Shift::unassigned("s1", "Floater").with_position("p1");

        assert!(!shift.is_assigned());
        assert!(!shift.occupies("p1", make_date(2025, 11, 20)));
    }

    #[test]
    fn test_shift_json_uses_camel_case() {
        let shift = Shift::assigned("s1", "9am - 5pm", "p1", make_date(2025, 11, 20));
        let json = serde_json::to_value(&shift).unwrap();

        assert_eq!(json["positionId"], "p1");
        assert_eq!(json["date"], "2025-11-20");
        assert_eq!(json["label"], "9am - 5pm");
    }

    #[test]
    fn test_shift_json_empty_fields_are_unassigned() {
        let json = r#"{"id": "s3", "label": "Floater", "positionId": "", "date": ""}"#;
        let shift: Shift = serde_json::from_str(json).unwrap();

        assert_eq!(shift, Shift::unassigned("s3", "Floater"));
        let back = serde_json::to_value(&shift).unwrap();
        assert!(back.get("positionId").is_none());
        assert!(back.get("date").is_none());
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("day".parse::<ViewMode>(), Ok(ViewMode::Day));
        assert_eq!("WEEK".parse::<ViewMode>(), Ok(ViewMode::Week));
        assert_eq!(" Month ".parse::<ViewMode>(), Ok(ViewMode::Month));
        assert_eq!("year".parse::<ViewMode>(), Ok(ViewMode::Year));
        assert_eq!(
            "fortnight".parse::<ViewMode>(),
            Err(ViewModeError::Unknown("fortnight".to_string()))
        );
    }

    #[test]
    fn test_view_mode_defaults_to_week() {
        assert_eq!(ViewMode::default(), ViewMode::Week);
    }

    #[test]
    fn test_view_mode_labels() {
        let labels: Vec<&str> = ViewMode::ALL.iter().map(|mode| mode.label()).collect();
        assert_eq!(labels, vec!["DAY", "WEEK", "MONTH", "YEAR"]);
        assert_eq!(
            serde_json::to_string(&ViewMode::Month).unwrap(),
            "\"month\""
        );
    }

    #[test]
    fn test_cycle_length_validation() {
        assert_eq!(CycleLength::new(7).map(|c| c.get()), Ok(7));
        assert_eq!(CycleLength::new(10).map(|c| c.days()), Ok(10));
        assert_eq!(CycleLength::new(0), Err(ConfigError::InvalidCycleLength(0)));
        assert_eq!(
            CycleLength::new(-3),
            Err(ConfigError::InvalidCycleLength(-3))
        );
        assert_eq!(
            CycleLength::new(i64::MAX),
            Err(ConfigError::InvalidCycleLength(i64::MAX))
        );
        assert_eq!(CycleLength::default(), CycleLength::WEEK);
    }

    #[test]
    fn test_cycle_length_upper_bound() {
        assert_eq!(CycleLength::new(366).map(|c| c.get()), Ok(CycleLength::MAX_DAYS));
        assert_eq!(
            CycleLength::new(367),
            Err(ConfigError::InvalidCycleLength(367))
        );
        assert_eq!(
            CycleLength::new(i64::from(u32::MAX)),
            Err(ConfigError::InvalidCycleLength(i64::from(u32::MAX)))
        );
    }

    #[test]
    fn test_cycle_length_deserialize_rejects_zero() {
        assert_eq!(
            serde_json::from_str::<CycleLength>("10").unwrap(),
            CycleLength::new(10).unwrap()
        );
        assert!(serde_json::from_str::<CycleLength>("0").is_err());
    }
}
