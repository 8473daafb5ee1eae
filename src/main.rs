use clap::Parser;
use coord_converter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Coordinate Converter - EPSG Reprojection Tool");
    println!("=============================================");
    println!();
    println!("Convert tabular coordinate pairs between geographic and projected");
    println!("reference systems identified by EPSG codes.");
    println!();
    println!("USAGE:");
    println!("    coord-converter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    transform   Reproject coordinates from a CSV file (main command)");
    println!("    systems     List the well-known selectable reference systems");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Reproject WGS 84 longitude/latitude pairs to UTM zone 30N:");
    println!("    coord-converter transform --input coords.csv --from 4326 --to 32630");
    println!();
    println!("    # Export to a chosen file instead of stdout:");
    println!("    coord-converter transform -i coords.csv -f 4326 -t 2136 -o ghana.csv");
    println!();
    println!("    # List the selectable reference systems:");
    println!("    coord-converter systems");
    println!();
    println!("NOTES:");
    println!("    X is longitude or easting, Y is latitude or northing.");
    println!("    X goes in the first column, Y in the second.");
    println!("    Column headers in the CSV file are not necessary.");
    println!();
    println!("For detailed help on any command, use:");
    println!("    coord-converter <COMMAND> --help");
}
