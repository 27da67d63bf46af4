//! Scheduler configuration assembled from CLI options and the seed file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shiftboard_core::schedule::{
    demo_positions, demo_reference_date, demo_shifts, Clock, Position, Scheduler,
    SchedulerOptions, Shift,
};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Positions and shifts to seed the scheduler with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Seed {
    /// The built-in demo roster.
    pub fn demo() -> Self {
        Self {
            positions: demo_positions(),
            shifts: demo_shifts(),
        }
    }

    /// Loads a seed file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Everything needed to construct a [`Scheduler`].
#[derive(Debug, Clone)]
pub struct Config {
    pub seed: Seed,
    pub options: SchedulerOptions,
}

impl Config {
    /// Resolves the configuration from parsed CLI arguments.
    ///
    /// Without a seed file the demo roster is used, and the reference date
    /// defaults to the demo week instead of today.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (seed, default_date) = match &cli.seed {
            Some(path) => (Seed::load(path)?, None),
            None => (Seed::demo(), Some(demo_reference_date())),
        };

        let mut options = SchedulerOptions::default()
            .with_initial_view(cli.view)
            .with_cycle_length(cli.cycle_length);
        options.initial_date = cli.date.or(default_date);

        tracing::debug!(
            positions = seed.positions.len(),
            shifts = seed.shifts.len(),
            "Configuration loaded"
        );

        Ok(Self { seed, options })
    }

    /// Builds the scheduler, failing on invalid seed data or options.
    pub fn scheduler(self, clock: &impl Clock) -> Result<Scheduler> {
        Ok(Scheduler::new(
            self.seed.positions,
            self.seed.shifts,
            self.options,
            clock,
        )?)
    }
}
