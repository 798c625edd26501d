//! Report command: full diagnostic for one location

use super::shared::{load_data, print_json};
use crate::analytics::{
    Diagnostic, IndexScore, LocationOutcome, ScoreLabel, Severity, StatusTier, diagnose_location,
};
use crate::cli::args::ReportArgs;
use crate::config::{EngineConfig, OutputFormat};
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;

/// JSON envelope for a report
#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    outcome: &'a LocationOutcome,
}

pub async fn run_report(args: &ReportArgs, config: &EngineConfig) -> anyhow::Result<()> {
    let dataset = load_data(config).await?;
    let query = args.location.as_deref().unwrap_or_default();
    let outcome = diagnose_location(&dataset, query, config.suggestion_count);

    match config.output_format {
        OutputFormat::Json => print_json(&ReportOutput {
            generated_at: Utc::now(),
            outcome: &outcome,
        }),
        OutputFormat::Text => {
            print_outcome(&outcome);
            Ok(())
        }
    }
}

fn print_outcome(outcome: &LocationOutcome) {
    match outcome {
        LocationOutcome::NoLocationSelected => {
            println!("{}", "No location selected.".yellow());
            println!("Pass a location name, e.g. `report \"Nashik Road\"`.");
        }
        LocationOutcome::NoData { query, suggestions } => {
            println!("{} '{}'", "No data found for".bright_red().bold(), query);
            if !suggestions.is_empty() {
                println!("Known locations include: {}", suggestions.join(", "));
            }
        }
        LocationOutcome::Ready(diagnostic) => print_diagnostic(diagnostic),
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let latest = &diagnostic.latest;

    println!(
        "{} ({})",
        diagnostic.location.bright_green().bold(),
        latest.year
    );
    println!();

    println!(
        "Status:        {}",
        tier_colored(diagnostic.status.tier, diagnostic.status.label).bold()
    );
    println!("               {}", diagnostic.status.description);
    println!(
        "Health score:  {} / 100 ({})",
        label_colored(diagnostic.score.label, &diagnostic.score.value.to_string()).bold(),
        diagnostic.score.label
    );
    println!();

    println!("{}", "Latest readings".bright_white().bold());
    println!("  Water level:     {} m below surface", latest.water_level);
    println!("  Rainfall:        {} mm", latest.rainfall);
    println!("  Depletion:       {}%", latest.groundwater_depletion);
    println!("  pH:              {}", latest.ph);
    println!("  Usage:           {}", usage_line(diagnostic));
    println!();

    println!("{}", "Sub-indices".bright_white().bold());
    print_index("Quality", &diagnostic.indices.quality);
    print_index("Usage", &diagnostic.indices.usage);
    print_index("Depletion", &diagnostic.indices.depletion);
    println!();

    println!("{}", "Insights".bright_white().bold());
    for insight in &diagnostic.insights {
        let marker = match insight.severity {
            Severity::Danger => "!!".bright_red().bold(),
            Severity::Warning => "! ".yellow().bold(),
            Severity::Success => "ok".green().bold(),
        };
        println!("  {} {}", marker, insight.message);
    }

    if diagnostic.history.len() > 1 {
        println!();
        println!("{}", "History".bright_white().bold());
        println!("  {:<6} {:>12} {:>12} {:>10}", "Year", "Level (m)", "Rain (mm)", "Depl (%)");
        for record in &diagnostic.history {
            println!(
                "  {:<6} {:>12} {:>12} {:>10}",
                record.year, record.water_level, record.rainfall, record.groundwater_depletion
            );
        }
    }
}

/// Total usage to one decimal with its breakdown
fn usage_line(diagnostic: &Diagnostic) -> String {
    let latest = &diagnostic.latest;
    format!(
        "{:.1} Ml (agri {}, industry {}, household {})",
        diagnostic.total_usage,
        latest.agricultural_usage,
        latest.industrial_usage,
        latest.household_usage
    )
}

fn print_index(name: &str, index: &IndexScore) {
    println!(
        "  {:<10} {:>3}  {}",
        name,
        label_colored(index.band, &index.value.to_string()),
        index.band
    );
}

fn tier_colored(tier: StatusTier, text: &str) -> ColoredString {
    match tier {
        StatusTier::Safe => text.green(),
        StatusTier::Moderate => text.yellow(),
        StatusTier::Critical => text.bright_red(),
    }
}

fn label_colored(label: ScoreLabel, text: &str) -> ColoredString {
    match label {
        ScoreLabel::Good => text.green(),
        ScoreLabel::Moderate => text.yellow(),
        ScoreLabel::Critical => text.bright_red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_usage_line_rounds_total() {
        let record = Record {
            location: "Trimbak".to_string(),
            year: 2023,
            water_level: 6.0,
            rainfall: 900.0,
            groundwater_depletion: 20.0,
            ph: 7.4,
            agricultural_usage: 0.1,
            industrial_usage: 0.2,
            household_usage: 0.0,
        };
        let diagnostic = Diagnostic::from_records(std::slice::from_ref(&record)).unwrap();

        assert_eq!(
            usage_line(&diagnostic),
            "0.3 Ml (agri 0.1, industry 0.2, household 0)"
        );
    }
}
