//! The view state machine and its command interface.
//!
//! A [`Scheduler`] is an immutable value. Each command (`on_prev`, `on_next`,
//! `on_today`, `on_set_view`, `on_drag_end`) returns a new scheduler and
//! leaves the receiver untouched, so the host decides when the visible state
//! changes and any reader of an older value keeps a consistent snapshot.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::collection::ShiftCollection;
use super::error::ConfigError;
use super::navigation::Navigator;
use super::operations::validate_positions;
use super::reassign::reassign;
use super::types::{CycleLength, Position, Shift, ViewMode};
use super::view::{build_view, Render, ScheduleView};
use super::window::VisibleWindow;

/// Drag-end notification from the gesture layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEndEvent {
    /// ID of the dragged shift.
    pub active_id: String,
    /// Drop target under the pointer, if any.
    #[serde(default)]
    pub over_id: Option<String>,
}

impl DragEndEvent {
    /// A drag that ended over a drop target.
    pub fn dropped(active_id: impl Into<String>, over_id: impl Into<String>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: Some(over_id.into()),
        }
    }

    /// A drag that ended with nothing under the pointer.
    pub fn cancelled(active_id: impl Into<String>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: None,
        }
    }
}

/// A serialized user command, for hosts that queue or script input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Prev,
    Next,
    Today,
    SetView { view: ViewMode },
    DragEnd(DragEndEvent),
}

/// Host-supplied construction options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerOptions {
    /// Initial reference date; today when absent.
    #[serde(default)]
    pub initial_date: Option<NaiveDate>,
    #[serde(default)]
    pub initial_view: ViewMode,
    /// Raw cycle length, validated by [`Scheduler::new`].
    #[serde(default = "default_cycle_length")]
    pub cycle_length: i64,
}

fn default_cycle_length() -> i64 {
    CycleLength::WEEK.days()
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            initial_date: None,
            initial_view: ViewMode::default(),
            cycle_length: default_cycle_length(),
        }
    }
}

impl SchedulerOptions {
    /// Sets the initial reference date.
    pub fn with_initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date);
        self
    }

    /// Sets the initial view mode.
    pub fn with_initial_view(mut self, view: ViewMode) -> Self {
        self.initial_view = view;
        self
    }

    /// Sets the cycle length in days.
    pub fn with_cycle_length(mut self, days: i64) -> Self {
        self.cycle_length = days;
        self
    }
}

/// The scheduling widget's complete state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    positions: Arc<[Position]>,
    shifts: ShiftCollection,
    navigator: Navigator,
}

impl Scheduler {
    /// Builds a scheduler from the host's seed data.
    ///
    /// Fails on a non-positive cycle length, empty/duplicate position IDs,
    /// position IDs containing the drop target delimiter, or duplicate shift
    /// IDs. These are integration bugs and are not recovered from.
    pub fn new(
        positions: Vec<Position>,
        shifts: Vec<Shift>,
        options: SchedulerOptions,
        clock: &impl Clock,
    ) -> Result<Self, ConfigError> {
        let cycle = CycleLength::new(options.cycle_length)?;
        validate_positions(&positions)?;
        let shifts = ShiftCollection::new(shifts)?;
        let reference = options.initial_date.unwrap_or_else(|| clock.today());

        tracing::debug!(
            positions = positions.len(),
            shifts = shifts.len(),
            %reference,
            view = %options.initial_view,
            cycle_length = cycle.get(),
            "Scheduler created"
        );

        Ok(Self {
            positions: positions.into(),
            shifts,
            navigator: Navigator::new(reference, options.initial_view, cycle),
        })
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The working shift collection.
    pub fn shifts(&self) -> &ShiftCollection {
        &self.shifts
    }

    pub fn view_mode(&self) -> ViewMode {
        self.navigator.view_mode()
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.navigator.reference_date()
    }

    pub fn cycle_length(&self) -> CycleLength {
        self.navigator.cycle_length()
    }

    /// Derives the visible window for the current state.
    pub fn window(&self) -> VisibleWindow {
        self.navigator.window()
    }

    pub fn on_prev(&self) -> Self {
        self.navigate(self.navigator.prev())
    }

    pub fn on_next(&self) -> Self {
        self.navigate(self.navigator.next())
    }

    pub fn on_today(&self, clock: &impl Clock) -> Self {
        self.navigate(self.navigator.today(clock))
    }

    /// Switches the view mode, keeping the reference date.
    pub fn on_set_view(&self, mode: ViewMode) -> Self {
        self.navigate(self.navigator.set_view_mode(mode))
    }

    /// Handles the end of a drag gesture.
    ///
    /// A drag with no target is cancelled. Malformed targets and unknown
    /// shifts are logged and ignored.
    pub fn on_drag_end(&self, event: &DragEndEvent) -> Self {
        let Some(over_id) = event.over_id.as_deref() else {
            tracing::debug!(active_id = %event.active_id, "Drag cancelled without a target");
            return self.clone();
        };

        Self {
            shifts: reassign(&event.active_id, over_id, &self.shifts),
            ..self.clone()
        }
    }

    /// Applies a serialized command.
    pub fn apply(&self, command: &Command, clock: &impl Clock) -> Self {
        match command {
            Command::Prev => self.on_prev(),
            Command::Next => self.on_next(),
            Command::Today => self.on_today(clock),
            Command::SetView { view } => self.on_set_view(*view),
            Command::DragEnd(event) => self.on_drag_end(event),
        }
    }

    /// Builds the view model for the current mode.
    pub fn view(&self) -> ScheduleView {
        build_view(&self.window(), &self.positions, &self.shifts)
    }

    /// Renders the current view through a presentation collaborator.
    pub fn render<R: Render>(&self, renderer: &R) -> R::Output {
        renderer.render(&self.view())
    }

    fn navigate(&self, navigator: Navigator) -> Self {
        tracing::debug!(
            reference = %navigator.reference_date(),
            view = %navigator.view_mode(),
            "Navigated"
        );
        Self {
            navigator,
            ..self.clone()
        }
    }
}
