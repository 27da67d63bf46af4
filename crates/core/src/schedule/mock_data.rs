//! Demo seed data for hosts and tests.

use chrono::NaiveDate;

use super::types::{Position, Shift};

/// The reference date the demo shifts are laid out around.
pub fn demo_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap_or_default()
}

pub fn demo_positions() -> Vec<Position> {
    vec![
        Position::new("p1", "Cashier"),
        Position::new("p2", "Kitchen"),
        Position::new("p3", "Manager"),
    ]
}

pub fn demo_shifts() -> Vec<Shift> {
    let thursday = demo_reference_date();
    let friday = thursday.succ_opt().unwrap_or(thursday);

    vec![
        Shift::assigned("s1", "9am - 5pm", "p1", thursday),
        Shift::assigned("s2", "10am - 6pm", "p2", friday),
    ]
}
