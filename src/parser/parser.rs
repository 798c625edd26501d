//! Core record parser implementation
//!
//! Reads the header, builds the column mapping and parses every data row,
//! collecting row-level failures instead of aborting.

use tracing::{debug, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::{is_blank_row, parse_record};
use super::stats::{ParseResult, ParseStats};
use crate::error::{GroundwaterError, Result};

/// Parse monitoring table text into typed records
///
/// Fails only when the input as a whole is unusable (no header, or a
/// required column is missing). Individual bad rows are skipped and listed
/// in the returned statistics.
pub fn parse_records(content: &str) -> Result<ParseResult> {
    if content.trim().is_empty() {
        return Err(GroundwaterError::EmptyInput);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() || is_blank_row(&headers) {
        return Err(GroundwaterError::EmptyInput);
    }

    let mapping = ColumnMapping::analyze(&headers)?;
    let extra = mapping.extra_columns();
    if !extra.is_empty() {
        debug!("Ignoring unused columns: {:?}", extra);
    }

    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        if is_blank_row(&row) {
            continue;
        }

        stats.total_rows += 1;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        match parse_record(&row, &mapping) {
            Ok(record) => {
                records.push(record);
                stats.rows_parsed += 1;
            }
            Err(e) => {
                debug!("Skipped line {}: {}", line, e);
                stats.add_issue(line, e);
            }
        }
    }

    if !stats.is_clean() {
        warn!("{}", stats.summary());
    } else {
        debug!("{}", stats.summary());
    }

    Ok(ParseResult { records, stats })
}
