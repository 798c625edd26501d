//! Record parser for groundwater monitoring tables
//!
//! Turns comma-delimited text with a header row into typed [`Record`]s.
//! Columns are located by header name against a fixed schema, and every
//! data row is parsed independently so one malformed row never poisons the
//! rest of the table.
//!
//! ## Architecture
//!
//! - [`parser`] - Orchestration: header handling and row iteration
//! - [`column_mapping`] - Header analysis and required-column checks
//! - [`record_parser`] - Individual row conversion
//! - [`field_parsers`] - Typed field extraction helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use groundwater_analytics::parser::parse_records;
//!
//! let text = "Location,Year,Water_Level,Rainfall,Groundwater_Depletion,pH,Agricultural_Usage,Industrial_Usage,Household_Usage\n\
//!             Eklahre,2023,7.5,980,22,7.4,210,45,60\n";
//! let result = parse_records(text).unwrap();
//! assert_eq!(result.records.len(), 1);
//! assert!(result.stats.is_clean());
//! ```
//!
//! [`Record`]: crate::models::Record

pub mod column_mapping;
pub mod field_parsers;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use parser::parse_records;
pub use stats::{ParseResult, ParseStats, RowIssue};
