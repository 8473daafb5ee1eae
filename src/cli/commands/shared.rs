//! Shared components for CLI commands
//!
//! Logging setup and result reporting used across the command
//! implementations.

use colored::Colorize;

use crate::Result;
use crate::pipeline::TransformStats;

/// Set up structured logging for a command invocation
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coord_converter={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Print a human-readable summary of a completed transform
pub fn report_transform(stats: &TransformStats, destination: &str) {
    println!();
    println!("{}", "Transform complete".green().bold());
    println!(
        "  {} {} -> {}",
        "Systems:".bold(),
        stats.source_crs,
        stats.target_crs
    );
    println!(
        "  {} {} in, {} dropped, {} out",
        "Rows:".bold(),
        stats.rows_in,
        stats.rows_dropped,
        stats.rows_out
    );
    println!("  {} {}", "Written to:".bold(), destination);
}
