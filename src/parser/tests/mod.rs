//! Test fixtures for record parser testing

mod field_tests;
mod stats_tests;

/// Canonical header row of the monitoring table
pub const HEADER: &str = "Location,Year,Water_Level,Rainfall,Groundwater_Depletion,pH,Agricultural_Usage,Industrial_Usage,Household_Usage";

/// Helper to create a well-formed table covering two locations
pub fn create_test_table() -> String {
    format!(
        "{HEADER}
Eklahre,2021,6.2,1010,18,7.4,220,40,55
Eklahre,2022,6.8,940,21,7.5,230,42,57
Deolali,2021,12.4,720,48,8.1,310,95,88
Deolali,2022,13.1,610,52,8.3,320,101,90
"
    )
}

/// Helper to build a table from data lines under the canonical header
pub fn table_with_rows(rows: &[&str]) -> String {
    let mut table = String::from(HEADER);
    for row in rows {
        table.push('\n');
        table.push_str(row);
    }
    table.push('\n');
    table
}
