//! JSON output formatting.

use shiftboard_core::schedule::{Render, ScheduleView};

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Renders views as compact JSON for other programs to consume.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    type Output = String;

    fn render(&self, view: &ScheduleView) -> String {
        format_json(view)
    }
}
