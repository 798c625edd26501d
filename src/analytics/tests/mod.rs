//! Shared fixtures for analytics tests

use crate::models::Record;

mod status_tests;

/// A record with neutral values: safe level, ideal pH, plenty of rain
pub fn base_record() -> Record {
    Record {
        location: "Eklahre".to_string(),
        year: 2023,
        water_level: 5.0,
        rainfall: 1200.0,
        groundwater_depletion: 0.0,
        ph: 7.5,
        agricultural_usage: 0.0,
        industrial_usage: 0.0,
        household_usage: 0.0,
    }
}

/// Base record with a given year and water level
pub fn record_at(year: i32, water_level: f64) -> Record {
    Record {
        year,
        water_level,
        ..base_record()
    }
}
