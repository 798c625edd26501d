//! Shared components for CLI commands
//!
//! Logging setup, layered configuration and data loading used by every
//! subcommand.

use crate::cli::args::Args;
use crate::config::EngineConfig;
use crate::dataset::{Dataset, load_dataset};
use crate::error::{GroundwaterError, Result};
use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from the flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("groundwater_analytics={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| GroundwaterError::configuration(format!("failed to set up logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<EngineConfig> {
    let config = EngineConfig::load(args.config_file.as_deref())?;
    let config = apply_cli_overrides(config, args);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(mut config: EngineConfig, args: &Args) -> EngineConfig {
    if let Some(path) = &args.data_path {
        config = config.with_data_path(path.clone());
    }
    if let Some(count) = args.suggestion_count {
        config = config.with_suggestion_count(count);
    }
    if let Some(format) = args.format {
        config = config.with_output_format(format);
    }
    if args.strict {
        config = config.with_strict();
    }
    config
}

/// Load the configured data file
pub async fn load_data(config: &EngineConfig) -> anyhow::Result<Dataset> {
    let dataset = load_dataset(&config.data_path, config.strict)
        .await
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;

    info!(
        "Loaded {} records across {} locations",
        dataset.record_count(),
        dataset.locations().len()
    );
    Ok(dataset)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
