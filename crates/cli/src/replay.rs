//! Scripted command replay.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use shiftboard_core::schedule::{Clock, Command, Scheduler, ViewMode};

use crate::error::{CliError, Result};

/// Outcome of one replayed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub index: usize,
    pub command: Command,
    pub reference: NaiveDate,
    pub view: ViewMode,
    /// Whether the shift collection changed.
    pub shifts_changed: bool,
}

/// Loads a command script: a JSON array of commands.
pub fn load_script(path: &Path) -> Result<Vec<Command>> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Applies the commands in order, returning the final state and a log of
/// every step.
pub fn replay(
    initial: Scheduler,
    commands: &[Command],
    clock: &impl Clock,
) -> (Scheduler, Vec<ReplayStep>) {
    let mut steps = Vec::with_capacity(commands.len());
    let mut state = initial;

    for (index, command) in commands.iter().enumerate() {
        let next = state.apply(command, clock);
        steps.push(ReplayStep {
            index,
            command: command.clone(),
            reference: next.reference_date(),
            view: next.view_mode(),
            shifts_changed: !next.shifts().ptr_eq(state.shifts()),
        });
        state = next;
    }

    tracing::info!(commands = commands.len(), "Replay finished");
    (state, steps)
}

/// Short human-readable form of a command.
pub fn describe(command: &Command) -> String {
    match command {
        Command::Prev => "prev".to_string(),
        Command::Next => "next".to_string(),
        Command::Today => "today".to_string(),
        Command::SetView { view } => format!("set_view {view}"),
        Command::DragEnd(event) => match &event.over_id {
            Some(over_id) => format!("drag_end {} -> {over_id}", event.active_id),
            None => format!("drag_end {} (cancelled)", event.active_id),
        },
    }
}
