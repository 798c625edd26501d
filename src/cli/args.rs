//! Command-line argument definitions for groundwater analytics
//!
//! Defines the CLI interface using the clap derive API. Data, config and
//! output flags are global so they can follow any subcommand.

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the groundwater analytics engine
///
/// Reads a table of per-location yearly groundwater records and reports
/// status, health scores and insights for each monitored location.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "groundwater-analytics",
    version,
    about = "Groundwater health diagnostics from yearly monitoring records",
    long_about = "Loads a CSV table of per-location yearly groundwater observations and derives \
                  a three-tier status, a composite health score, quality/usage/depletion \
                  sub-indices and rule-based insights for any monitored location."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the monitoring data table
    ///
    /// Overrides `data_path` from the configuration file.
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        global = true,
        help = "Path to the monitoring data CSV"
    )]
    pub data_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for config.toml in the user config directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        global = true,
        help = "Path to configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for command results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        global = true,
        help = "Output format (text or json)"
    )]
    pub format: Option<OutputFormat>,

    /// Fail the load if any row is rejected
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Number of known locations suggested when a query has no data
    #[arg(long = "suggestions", value_name = "N", global = true)]
    pub suggestion_count: Option<usize>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        conflicts_with = "quiet"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List every monitored location
    Locations,
    /// Dataset-wide summary for the most recent year
    Summary,
    /// Full diagnostic for one location
    Report(ReportArgs),
    /// Parse the data file and report rejected rows
    Validate,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Location to diagnose, matched case-insensitively
    #[arg(value_name = "LOCATION")]
    pub location: Option<String>,
}

impl Args {
    /// Log level derived from -v/--quiet
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_with_global_flags() {
        let args = Args::try_parse_from([
            "groundwater-analytics",
            "report",
            "Nashik Road",
            "--data",
            "readings.csv",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Report(ref report)) => {
                assert_eq!(report.location.as_deref(), Some("Nashik Road"))
            }
            ref other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.data_path, Some(PathBuf::from("readings.csv")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_report_location_is_optional() {
        let args = Args::try_parse_from(["groundwater-analytics", "report"]).unwrap();
        match args.command {
            Some(Commands::Report(report)) => assert!(report.location.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from(["groundwater-analytics", "summary"]).unwrap();
        assert_eq!(args.get_log_level(), "warn");

        let args = Args::try_parse_from(["groundwater-analytics", "-q", "summary"]).unwrap();
        assert_eq!(args.get_log_level(), "error");

        let args = Args::try_parse_from(["groundwater-analytics", "-vvvv", "locations"]).unwrap();
        assert_eq!(args.get_log_level(), "trace");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["groundwater-analytics", "-v", "-q", "summary"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["groundwater-analytics"]).unwrap();
        assert!(args.command.is_none());
    }
}
