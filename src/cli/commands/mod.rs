//! Command implementations for the groundwater analytics CLI
//!
//! Each subcommand lives in its own module. All of them share the same
//! startup: logging, then layered configuration, then the data load.

pub mod locations;
pub mod report;
pub mod shared;
pub mod summary;
pub mod validate;

use crate::cli::args::{Args, Commands};
use tracing::debug;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `locations`: distinct monitored locations
/// - `summary`: dataset-wide figures for the latest year
/// - `report`: per-location diagnostic
/// - `validate`: parse statistics and rejected rows
pub async fn run(args: Args) -> anyhow::Result<()> {
    shared::setup_logging(&args)?;
    debug!("Arguments: {:?}", args);

    let config = shared::load_configuration(&args)?;

    match args.command {
        Some(Commands::Locations) => locations::run_locations(&config).await,
        Some(Commands::Summary) => summary::run_summary(&config).await,
        Some(Commands::Report(report_args)) => report::run_report(&report_args, &config).await,
        Some(Commands::Validate) => validate::run_validate(&config).await,
        None => Ok(()),
    }
}
