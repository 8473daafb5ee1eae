//! Command implementations for the coordinate converter CLI
//!
//! This module contains the command execution logic and error handling
//! for the CLI interface. Each command is implemented in its own module.

pub mod shared;
pub mod systems;
pub mod transform;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the coordinate converter
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `transform`: the coordinate transformation workflow
/// - `systems`: listing of well-known selectable reference systems
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Transform(transform_args) => transform::run_transform(transform_args),
        Commands::Systems(systems_args) => systems::run_systems(systems_args),
    }
}
