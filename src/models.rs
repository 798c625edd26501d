//! Core data structures for groundwater analytics.
//!
//! Defines the typed monitoring record produced by the parser. Serialized
//! field names follow the column names of the ingestion table.

use serde::{Deserialize, Serialize};

/// One location-year groundwater observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Year")]
    pub year: i32,

    /// Meters below surface (lower is better)
    #[serde(rename = "Water_Level")]
    pub water_level: f64,

    /// Millimeters
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,

    /// Percent, conceptually 0-100
    #[serde(rename = "Groundwater_Depletion")]
    pub groundwater_depletion: f64,

    #[serde(rename = "pH")]
    pub ph: f64,

    /// Megalitres
    #[serde(rename = "Agricultural_Usage")]
    pub agricultural_usage: f64,

    /// Megalitres
    #[serde(rename = "Industrial_Usage")]
    pub industrial_usage: f64,

    /// Megalitres
    #[serde(rename = "Household_Usage")]
    pub household_usage: f64,
}

impl Record {
    /// Combined agricultural, industrial and household usage in megalitres
    pub fn total_usage(&self) -> f64 {
        self.agricultural_usage + self.industrial_usage + self.household_usage
    }

    /// Case-folded location used for grouping and lookups
    pub fn location_key(&self) -> String {
        fold_location(&self.location)
    }
}

/// Fold a location name for case-insensitive comparison
pub fn fold_location(location: &str) -> String {
    location.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            location: "Deolali".to_string(),
            year: 2022,
            water_level: 9.5,
            rainfall: 640.0,
            groundwater_depletion: 35.0,
            ph: 7.2,
            agricultural_usage: 300.0,
            industrial_usage: 120.5,
            household_usage: 80.0,
        }
    }

    #[test]
    fn test_total_usage() {
        assert_eq!(sample().total_usage(), 500.5);
    }

    #[test]
    fn test_location_key_folds_case() {
        let mut record = sample();
        record.location = "NASHIK Road".to_string();
        assert_eq!(record.location_key(), "nashik road");
    }

    #[test]
    fn test_serializes_with_column_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Location"], "Deolali");
        assert_eq!(json["Water_Level"], 9.5);
        assert_eq!(json["pH"], 7.2);
    }
}
