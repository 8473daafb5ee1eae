//! Systems command implementation
//!
//! Lists the well-known selectable reference systems with descriptions.
//! The pipeline itself accepts any syntactically valid EPSG integer; this
//! list mirrors the fixed choices the interactive surface offers.

use colored::Colorize;

use crate::Result;
use crate::app::services::reprojection::epsg;
use crate::cli::args::SystemsArgs;
use crate::cli::commands::shared;
use crate::constants::{WELL_KNOWN_EPSG_CODES, system_description};

/// Run the systems command
pub fn run_systems(args: SystemsArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), false)?;

    println!("{}", "Selectable reference systems".bold());
    println!();

    for &code in WELL_KNOWN_EPSG_CODES {
        let supported = if epsg::proj_string(code).is_some() {
            "supported".green()
        } else {
            "unsupported".red()
        };
        println!(
            "  {}  {}  [{}]",
            format!("EPSG:{}", code).cyan().bold(),
            system_description(code),
            supported
        );
    }

    println!();
    println!(
        "Any EPSG integer is accepted on the command line; codes outside the \
         registry fail at transform time."
    );

    Ok(())
}
