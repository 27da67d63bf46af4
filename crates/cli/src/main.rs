//! shiftboard CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use shiftboard_cli::cli::{Cli, Commands, OutputFormat};
use shiftboard_cli::output::{collect_targets, format_output, pretty, render_view};
use shiftboard_cli::replay::{load_script, replay};
use shiftboard_cli::Config;
use shiftboard_core::schedule::{DragEndEvent, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiftboard=info,shiftboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let clock = SystemClock;
    let state = Config::from_cli(&cli)?
        .scheduler(&clock)
        .context("Failed to build the scheduler")?;

    match cli.command {
        Commands::Show => println!("{}", render_view(&state, cli.format)),
        Commands::Window => {
            let window = state.window();
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&window, cli.format)),
                OutputFormat::Pretty => print!("{}", pretty::format_window(&window)),
            }
        }
        Commands::Targets => {
            let targets = collect_targets(&state.view());
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&targets, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_targets(&targets)),
            }
        }
        Commands::Replay { script } => {
            let commands = load_script(&script)?;
            let (state, steps) = replay(state, &commands, &clock);
            if !cli.quiet {
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&steps, cli.format)),
                    OutputFormat::Pretty => {
                        for step in &steps {
                            println!("{}", pretty::format_step(step));
                        }
                    }
                }
            }
            println!("{}", render_view(&state, cli.format));
        }
        Commands::Move {
            shift_id,
            target_id,
        } => {
            let event = DragEndEvent::dropped(shift_id.as_str(), target_id.as_str());
            let next = state.on_drag_end(&event);
            if next.shifts().ptr_eq(state.shifts()) && !cli.quiet {
                eprintln!("No change: {shift_id} was not moved to {target_id}");
            }
            println!("{}", render_view(&next, cli.format));
        }
    }

    Ok(())
}
