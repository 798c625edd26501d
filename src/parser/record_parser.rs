//! Individual row parsing for the monitoring table

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{parse_required_f64, parse_required_string, parse_required_year};
use crate::constants::columns;
use crate::error::RowError;
use crate::models::Record;

/// Parse one data row into a typed record
///
/// Rows whose field count differs from the header are rejected outright so
/// that no value is read from a shifted position.
pub fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<Record, RowError> {
    if record.len() != mapping.field_count {
        return Err(RowError::ColumnCountMismatch {
            expected: mapping.field_count,
            found: record.len(),
        });
    }

    Ok(Record {
        location: parse_required_string(record, mapping, columns::LOCATION)?,
        year: parse_required_year(record, mapping, columns::YEAR)?,
        water_level: parse_required_f64(record, mapping, columns::WATER_LEVEL)?,
        rainfall: parse_required_f64(record, mapping, columns::RAINFALL)?,
        groundwater_depletion: parse_required_f64(
            record,
            mapping,
            columns::GROUNDWATER_DEPLETION,
        )?,
        ph: parse_required_f64(record, mapping, columns::PH)?,
        agricultural_usage: parse_required_f64(record, mapping, columns::AGRICULTURAL_USAGE)?,
        industrial_usage: parse_required_f64(record, mapping, columns::INDUSTRIAL_USAGE)?,
        household_usage: parse_required_f64(record, mapping, columns::HOUSEHOLD_USAGE)?,
    })
}

/// True for a whitespace-only line
///
/// Such a line reads as a single empty field. Delimiter-only rows have
/// several fields and are parsed, so they surface as row issues.
pub fn is_blank_row(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}
