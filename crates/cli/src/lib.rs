//! shiftboard_cli - terminal host for the shiftboard scheduling core.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod replay;

pub use config::{Config, Seed};
pub use error::{CliError, Result};
