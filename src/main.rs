use clap::Parser;
use groundwater_analytics::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // Without a subcommand, show help and exit
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                signal?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(anyhow::anyhow!("interrupted by user"))
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Groundwater Analytics - Monitoring Record Diagnostics");
    println!("=====================================================");
    println!();
    println!("Derive groundwater status, health scores, sub-indices and insights");
    println!("from a CSV table of per-location yearly monitoring records.");
    println!();
    println!("USAGE:");
    println!("    groundwater-analytics <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    locations   List every monitored location");
    println!("    summary     Dataset-wide figures for the most recent year");
    println!("    report      Full diagnostic for one location");
    println!("    validate    Parse the data file and report rejected rows");
    println!();
    println!("OPTIONS:");
    println!("    -d, --data <PATH>       Monitoring data CSV (default: data.csv)");
    println!("    -c, --config <PATH>     Configuration file");
    println!("    -f, --format <FORMAT>   Output format: text or json");
    println!("    -v, --verbose           More logging (repeatable)");
    println!("    -h, --help              Show help information");
    println!();
    println!("EXAMPLES:");
    println!("    groundwater-analytics summary --data readings.csv");
    println!("    groundwater-analytics report \"Nashik Road\" --format json");
    println!("    groundwater-analytics validate --strict");
}
