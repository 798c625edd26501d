//! Location index for O(1) per-location record lookups
//!
//! Groups records by case-folded location name while keeping each group in
//! input order, and keeps the sorted list of distinct display names for
//! enumeration.

use crate::models::{Record, fold_location};
use std::collections::{BTreeSet, HashMap};

/// Records grouped by case-folded location
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    /// Folded location name to records in input order
    pub(crate) by_location: HashMap<String, Vec<Record>>,

    /// Distinct raw location names, lexicographically sorted
    pub(crate) locations: Vec<String>,
}

impl LocationIndex {
    /// Build the index in a single pass over the records
    pub fn build(records: &[Record]) -> Self {
        let mut by_location: HashMap<String, Vec<Record>> = HashMap::new();
        let mut names = BTreeSet::new();

        for record in records {
            by_location
                .entry(record.location_key())
                .or_default()
                .push(record.clone());
            names.insert(record.location.clone());
        }

        Self {
            by_location,
            locations: names.into_iter().collect(),
        }
    }

    /// All records for a location, compared case-insensitively
    ///
    /// Returns an empty slice when nothing matches.
    pub fn records_for(&self, location_query: &str) -> &[Record] {
        self.by_location
            .get(&fold_location(location_query))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if any record exists for a location
    pub fn contains(&self, location_query: &str) -> bool {
        self.by_location
            .contains_key(&fold_location(location_query))
    }

    /// Distinct display-case location names, sorted
    ///
    /// Names differing only in case are listed separately; they share one
    /// record group.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Number of distinct display-case location names
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// True when the index holds no records
    pub fn is_empty(&self) -> bool {
        self.by_location.is_empty()
    }
}
