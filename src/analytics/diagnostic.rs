//! Per-location diagnostic assembly
//!
//! Combines the latest record's status, score and sub-indices with the
//! insights for the location's history. Results are recomputed on every
//! query.

use serde::Serialize;
use tracing::{debug, warn};

use super::insights::{Insight, generate_insights};
use super::latest::{latest_record, sorted_by_year};
use super::score::{HealthScore, SubIndices, health_score, sub_indices};
use super::status::{StatusReport, classify_status};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::Record;

/// Everything the presentation layer shows for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Display name taken from the first matching record
    pub location: String,

    /// Record the status and scores are computed from
    pub latest: Record,

    pub status: StatusReport,
    pub score: HealthScore,
    pub indices: SubIndices,

    /// Combined usage of the latest record in megalitres
    pub total_usage: f64,

    pub insights: Vec<Insight>,

    /// All records for the location, sorted by year ascending
    pub history: Vec<Record>,
}

impl Diagnostic {
    /// Build a diagnostic from one location's records
    ///
    /// Fails with `EmptyRecordSet` when `records` is empty.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        let latest = latest_record(records)?;

        Ok(Self {
            location: records[0].location.clone(),
            latest: latest.clone(),
            status: classify_status(latest.water_level),
            score: health_score(latest),
            indices: sub_indices(latest),
            total_usage: latest.total_usage(),
            insights: generate_insights(latest, records),
            history: sorted_by_year(records),
        })
    }
}

/// Result of querying one caller-selected location
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LocationOutcome {
    /// The query was empty or whitespace
    NoLocationSelected,

    /// Nothing in the dataset matches the query
    NoData {
        query: String,
        suggestions: Vec<String>,
    },

    Ready(Box<Diagnostic>),
}

impl LocationOutcome {
    /// The diagnostic, if the query matched
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            LocationOutcome::Ready(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

/// Diagnose an untrusted location query against a dataset
///
/// Empty and unmatched queries are ordinary outcomes, never errors.
pub fn diagnose_location(
    dataset: &Dataset,
    location_query: &str,
    suggestion_count: usize,
) -> LocationOutcome {
    let query = location_query.trim();
    if query.is_empty() {
        debug!("Empty location query");
        return LocationOutcome::NoLocationSelected;
    }

    let records = dataset.records_for(query);
    match Diagnostic::from_records(records) {
        Ok(diagnostic) => {
            debug!(
                "Diagnosed {} from {} records: score {}",
                diagnostic.location,
                records.len(),
                diagnostic.score.value
            );
            LocationOutcome::Ready(Box::new(diagnostic))
        }
        Err(_) => {
            warn!("No data for location '{}'", query);
            LocationOutcome::NoData {
                query: query.to_string(),
                suggestions: dataset
                    .locations()
                    .iter()
                    .take(suggestion_count)
                    .cloned()
                    .collect(),
            }
        }
    }
}
