//! Transform command implementation
//!
//! Reads the input file, runs one pipeline invocation, and publishes the
//! transformed rows to the chosen export file or stdout.

use tracing::info;

use crate::Result;
use crate::app::services::serializer;
use crate::cli::args::TransformArgs;
use crate::cli::commands::shared;
use crate::cli::input;
use crate::pipeline::Pipeline;

/// Run the transform command
pub fn run_transform(args: TransformArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!(
        "Transforming {} from {} to {}",
        args.input_path.display(),
        args.source_crs,
        args.target_crs
    );

    let rows = input::read_rows(&args.input_path)?;

    let pipeline = Pipeline::new(args.config());
    let outcome = pipeline.run(&rows, args.source_crs, args.target_crs)?;

    match &args.output_path {
        Some(output_path) => {
            serializer::write_rows(output_path, &outcome.rows)?;
            if !args.quiet {
                shared::report_transform(&outcome.stats, &output_path.display().to_string());
            }
        }
        None => {
            // No export file chosen: the transformed rows are the display surface
            for row in &outcome.rows {
                println!("{}", row.join(","));
            }
            if !args.quiet {
                shared::report_transform(
                    &outcome.stats,
                    &pipeline.config().transformed_path().display().to_string(),
                );
            }
        }
    }

    Ok(())
}
