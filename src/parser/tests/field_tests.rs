//! Tests for field parsing helpers and column mapping

use super::HEADER;
use crate::error::RowError;
use crate::parser::column_mapping::ColumnMapping;
use crate::parser::field_parsers::{
    clean_field, parse_required_f64, parse_required_string, parse_required_year,
};
use csv::StringRecord;

fn header_mapping() -> ColumnMapping {
    let headers = StringRecord::from(HEADER.split(',').collect::<Vec<_>>());
    ColumnMapping::analyze(&headers).unwrap()
}

fn row(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_clean_field() {
    assert_eq!(clean_field("  Deolali "), "Deolali");
    assert_eq!(clean_field("\"Nashik Road\""), "Nashik Road");
    assert_eq!(clean_field(" \"7.5\" "), "7.5");
    assert_eq!(clean_field("\"\""), "");
    assert_eq!(clean_field(""), "");
}

#[test]
fn test_mapping_indexes_required_columns() {
    let mapping = header_mapping();
    assert_eq!(mapping.field_count, 9);
    assert_eq!(mapping.get_index("Location"), Some(0));
    assert_eq!(mapping.get_index("Household_Usage"), Some(8));
    assert!(mapping.has_column("pH"));
    assert!(!mapping.has_column("ph"));
    assert!(mapping.extra_columns().is_empty());
}

#[test]
fn test_mapping_reports_extra_columns() {
    let headers = StringRecord::from(
        format!("{HEADER},Taluka,District")
            .split(',')
            .collect::<Vec<_>>(),
    );
    let mapping = ColumnMapping::analyze(&headers).unwrap();
    assert_eq!(mapping.extra_columns(), vec!["District", "Taluka"]);
}

#[test]
fn test_parse_required_f64() {
    let mapping = header_mapping();
    let record = row(&["CIDCO", "2020", "-1.5e1", "", "x", "7", "1", "2", "3"]);

    assert_eq!(
        parse_required_f64(&record, &mapping, "Water_Level").unwrap(),
        -15.0
    );
    assert_eq!(
        parse_required_f64(&record, &mapping, "Rainfall").unwrap_err(),
        RowError::EmptyField { column: "Rainfall" }
    );
    assert_eq!(
        parse_required_f64(&record, &mapping, "Groundwater_Depletion").unwrap_err(),
        RowError::InvalidNumber {
            column: "Groundwater_Depletion",
            value: "x".to_string()
        }
    );
}

#[test]
fn test_parse_required_year() {
    let mapping = header_mapping();

    let ok = row(&["CIDCO", "2019", "1", "1", "1", "7", "1", "1", "1"]);
    assert_eq!(parse_required_year(&ok, &mapping, "Year").unwrap(), 2019);

    let whole_float = row(&["CIDCO", "2019.0", "1", "1", "1", "7", "1", "1", "1"]);
    assert_eq!(
        parse_required_year(&whole_float, &mapping, "Year").unwrap(),
        2019
    );

    let text = row(&["CIDCO", "last year", "1", "1", "1", "7", "1", "1", "1"]);
    assert_eq!(
        parse_required_year(&text, &mapping, "Year").unwrap_err(),
        RowError::InvalidYear {
            value: "last year".to_string()
        }
    );
}

#[test]
fn test_parse_required_string_strips_quotes() {
    let mapping = header_mapping();
    let record = row(&["\"Gangapur\"", "2019", "1", "1", "1", "7", "1", "1", "1"]);
    assert_eq!(
        parse_required_string(&record, &mapping, "Location").unwrap(),
        "Gangapur"
    );
}
