//! Validate command: parse the data file and report rejected rows
//!
//! Always loads leniently so every issue can be listed. With `strict`
//! configured, a file with rejected rows still fails the command.

use super::shared::print_json;
use crate::config::{EngineConfig, OutputFormat};
use crate::dataset::load_dataset;
use crate::parser::ParseStats;
use anyhow::{Context, bail};
use colored::*;
use serde_json::json;
use tracing::info;

/// Issues printed in text mode before truncating
const MAX_ISSUES_SHOWN: usize = 20;

pub async fn run_validate(config: &EngineConfig) -> anyhow::Result<()> {
    info!("Validating {}", config.data_path.display());

    let dataset = load_dataset(&config.data_path, false)
        .await
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    let stats = dataset.parse_stats();

    match config.output_format {
        OutputFormat::Json => print_json(&json!({
            "path": config.data_path,
            "locations": dataset.locations().len(),
            "stats": stats,
        }))?,
        OutputFormat::Text => print_stats(stats),
    }

    if config.strict && !stats.is_clean() {
        bail!(
            "{} of {} rows rejected in strict mode",
            stats.rows_skipped,
            stats.total_rows
        );
    }
    Ok(())
}

fn print_stats(stats: &ParseStats) {
    println!("{}", "Validation Summary".bright_green().bold());
    println!("  {}", stats.summary());

    if stats.is_clean() {
        println!("  {}", "All rows parsed".green());
        return;
    }

    println!();
    println!("{}", "Rejected rows".bright_red().bold());
    for issue in stats.issues.iter().take(MAX_ISSUES_SHOWN) {
        println!("  {}", issue);
    }
    if stats.issues.len() > MAX_ISSUES_SHOWN {
        println!(
            "  ... and {} more",
            stats.issues.len() - MAX_ISSUES_SHOWN
        );
    }
}
