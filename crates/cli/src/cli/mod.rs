//! CLI command definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use shiftboard_core::schedule::ViewMode;

/// Shift scheduling calendar in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shiftboard")]
#[command(version, about = "Shift scheduling calendar in the terminal", long_about = None)]
pub struct Cli {
    /// Seed file with positions and shifts (JSON). Uses demo data when absent.
    #[arg(long, env = "SHIFTBOARD_SEED")]
    pub seed: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long, env = "SHIFTBOARD_DATE")]
    pub date: Option<NaiveDate>,

    /// Initial view mode (day, week, month, year).
    #[arg(long, env = "SHIFTBOARD_VIEW", default_value = "week")]
    pub view: ViewMode,

    /// Number of days shown and stepped in the week view.
    #[arg(
        long,
        env = "SHIFTBOARD_CYCLE_LENGTH",
        default_value_t = 7,
        allow_negative_numbers = true
    )]
    pub cycle_length: i64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable text.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the current view.
    Show,
    /// Print the dates of the visible window.
    Window,
    /// List the drop target IDs of the visible window.
    Targets,
    /// Apply a JSON script of commands in order, then render.
    Replay {
        /// Path to a JSON array of commands.
        #[arg(long)]
        script: PathBuf,
    },
    /// Drop a shift onto a target, then render.
    Move {
        /// ID of the shift to move.
        shift_id: String,
        /// Drop target ID, e.g. "p1__2025-11-21".
        target_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["shiftboard", "show"]).unwrap();

        assert_eq!(cli.seed, None);
        assert_eq!(cli.view, ViewMode::Week);
        assert_eq!(cli.cycle_length, 7);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Show));
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "shiftboard",
            "--date",
            "2025-11-20",
            "--view",
            "Month",
            "--cycle-length",
            "14",
            "--format",
            "json",
            "move",
            "s1",
            "p1__2025-11-21",
        ])
        .unwrap();

        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 11, 20));
        assert_eq!(cli.view, ViewMode::Month);
        assert_eq!(cli.cycle_length, 14);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Move {
                shift_id,
                target_id,
            } => {
                assert_eq!(shift_id, "s1");
                assert_eq!(target_id, "p1__2025-11-21");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_view() {
        assert!(Cli::try_parse_from(["shiftboard", "--view", "decade", "show"]).is_err());
    }
}
