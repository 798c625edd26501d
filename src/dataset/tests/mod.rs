//! Shared test utilities and fixtures for dataset tests

use crate::models::Record;

mod loader_tests;

/// Create a test record with standard usage and quality values
pub fn create_test_record(location: &str, year: i32, water_level: f64, rainfall: f64) -> Record {
    Record {
        location: location.to_string(),
        year,
        water_level,
        rainfall,
        groundwater_depletion: 30.0,
        ph: 7.3,
        agricultural_usage: 250.0,
        industrial_usage: 60.0,
        household_usage: 70.0,
    }
}

/// Records for three locations, deliberately out of year order and mixed case
pub fn create_test_records() -> Vec<Record> {
    vec![
        create_test_record("Panchvati", 2022, 11.0, 640.0),
        create_test_record("CIDCO", 2021, 16.5, 480.0),
        create_test_record("panchvati", 2020, 9.0, 700.0),
        create_test_record("Eklahre", 2022, 6.0, 1100.0),
        create_test_record("CIDCO", 2022, 17.5, 420.0),
    ]
}
