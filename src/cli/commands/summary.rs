//! Summary command: dataset-wide figures for the most recent year

use super::shared::{load_data, print_json};
use crate::config::{EngineConfig, OutputFormat};
use crate::dataset::DatasetSummary;
use colored::*;

pub async fn run_summary(config: &EngineConfig) -> anyhow::Result<()> {
    let dataset = load_data(config).await?;
    let summary = dataset.summary();

    match config.output_format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Text => {
            print_summary(&summary);
            Ok(())
        }
    }
}

fn print_summary(summary: &DatasetSummary) {
    let missing = || "-".dimmed().to_string();

    println!("{}", "Dataset Summary".bright_green().bold());
    println!(
        "  Locations:            {}",
        summary.total_locations.to_string().bright_white().bold()
    );
    println!(
        "  Records:              {}",
        summary.total_records.to_string().bright_white().bold()
    );
    println!(
        "  Latest year:          {}",
        summary
            .latest_year
            .map(|year| year.to_string())
            .unwrap_or_else(missing)
    );
    println!(
        "  Avg rainfall:         {}",
        summary
            .rainfall_display()
            .map(|mm| format!("{} mm", mm))
            .unwrap_or_else(missing)
    );
    println!(
        "  Avg water level:      {}",
        summary
            .water_level_display()
            .map(|m| format!("{} m", m))
            .unwrap_or_else(missing)
    );
}
