//! Field parsing utilities for monitoring table rows
//!
//! Helpers that pull a named column out of a CSV row and convert it to the
//! type the schema expects, reporting problems as [`RowError`]s.

use super::column_mapping::ColumnMapping;
use crate::error::RowError;
use csv::StringRecord;

/// Trim whitespace and strip one pair of wrapping double quotes
pub fn clean_field(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    trimmed.strip_suffix('"').unwrap_or(trimmed)
}

/// Get a required, non-empty field value from a CSV row
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    column: &'static str,
) -> Result<&'a str, RowError> {
    let value = mapping
        .get_index(column)
        .and_then(|index| record.get(index))
        .map(clean_field)
        .unwrap_or("");

    if value.is_empty() {
        return Err(RowError::EmptyField { column });
    }

    Ok(value)
}

/// Parse a required string field
pub fn parse_required_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &'static str,
) -> Result<String, RowError> {
    get_required_field(record, mapping, column).map(str::to_string)
}

/// Parse a required finite f64 field
pub fn parse_required_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &'static str,
) -> Result<f64, RowError> {
    let value = get_required_field(record, mapping, column)?;

    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(RowError::InvalidNumber {
            column,
            value: value.to_string(),
        }),
    }
}

/// Parse a required year field
///
/// Accepts plain integers and whole-valued decimals such as `2020.0`.
pub fn parse_required_year(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &'static str,
) -> Result<i32, RowError> {
    let value = get_required_field(record, mapping, column)?;

    if let Ok(year) = value.parse::<i32>() {
        return Ok(year);
    }

    match value.parse::<f64>() {
        Ok(parsed)
            if parsed.is_finite()
                && parsed.fract() == 0.0
                && parsed >= i32::MIN as f64
                && parsed <= i32::MAX as f64 =>
        {
            Ok(parsed as i32)
        }
        _ => Err(RowError::InvalidYear {
            value: value.to_string(),
        }),
    }
}
