//! Locations command: list every monitored location

use super::shared::{load_data, print_json};
use crate::config::{EngineConfig, OutputFormat};
use colored::*;
use serde_json::json;

pub async fn run_locations(config: &EngineConfig) -> anyhow::Result<()> {
    let dataset = load_data(config).await?;
    let locations = dataset.locations();

    match config.output_format {
        OutputFormat::Json => print_json(&json!({
            "count": locations.len(),
            "locations": locations,
        })),
        OutputFormat::Text => {
            println!(
                "{} ({})",
                "Monitored locations".bright_green().bold(),
                locations.len().to_string().bright_white().bold()
            );
            for location in locations {
                println!("  {}", location);
            }
            Ok(())
        }
    }
}
