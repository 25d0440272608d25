use clap::Parser;
use gradmap::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Gradmap - School Coordinate Map Data Processor");
    println!("==============================================");
    println!();
    println!("Convert the concatenated-JSON school coordinate export into validated");
    println!("map markers and banner text for the graduation congratulations site.");
    println!();
    println!("USAGE:");
    println!("    gradmap <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    markers     Produce numbered map markers from the full parse");
    println!("    banner      Produce banner display text from the record count");
    println!("    validate    Parse the whole asset and report skipped spans");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Emit GeoJSON markers from the default asset location:");
    println!("    gradmap markers --format geojson -o markers.geojson");
    println!();
    println!("    # Banner text for a specific export:");
    println!("    gradmap banner --input exports/coordinates.ndjson");
    println!();
    println!("    # Check an export before publishing, failing on any bad span:");
    println!("    gradmap validate --input exports/coordinates.ndjson --strict");
    println!();
    println!("For detailed help on any command, use:");
    println!("    gradmap <COMMAND> --help");
}
