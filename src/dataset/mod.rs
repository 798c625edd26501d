//! Caller-owned dataset of monitoring records
//!
//! A [`Dataset`] bundles the parsed records, the statistics of the parse
//! that produced them, and the [`LocationIndex`] built over them. It is
//! built once and read-only afterwards; every analytics query borrows it.

pub mod index;
pub mod loader;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use index::LocationIndex;
pub use loader::load_dataset;
pub use summary::DatasetSummary;

use crate::error::Result;
use crate::models::Record;
use crate::parser::{ParseStats, parse_records};

/// Parsed records with their location index
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    index: LocationIndex,
    parse_stats: ParseStats,
}

impl Dataset {
    /// Build a dataset from already-typed records
    pub fn from_records(records: Vec<Record>) -> Self {
        let index = LocationIndex::build(&records);
        Self {
            records,
            index,
            parse_stats: ParseStats::default(),
        }
    }

    /// Parse monitoring table text into a dataset
    pub fn parse(content: &str) -> Result<Self> {
        let result = parse_records(content)?;
        let index = LocationIndex::build(&result.records);
        Ok(Self {
            records: result.records,
            index,
            parse_stats: result.stats,
        })
    }

    /// All records in input order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when no record was loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The location index
    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    /// Distinct locations for enumeration
    pub fn locations(&self) -> &[String] {
        self.index.locations()
    }

    /// Records for one location, case-insensitive, in input order
    pub fn records_for(&self, location_query: &str) -> &[Record] {
        self.index.records_for(location_query)
    }

    /// Statistics of the parse that produced this dataset
    pub fn parse_stats(&self) -> &ParseStats {
        &self.parse_stats
    }

    /// Dataset-wide headline figures
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::compute(&self.records, self.index.location_count())
    }
}
