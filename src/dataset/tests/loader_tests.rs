//! Tests for the file loading adapter

use crate::dataset::load_dataset;
use crate::error::GroundwaterError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const TABLE: &str = "Location,Year,Water_Level,Rainfall,Groundwater_Depletion,pH,Agricultural_Usage,Industrial_Usage,Household_Usage
Gangapur,2022,5.5,1150,12,7.6,180,20,45
Gangapur,2023,,1150,12,7.6,180,20,45
";

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[tokio::test]
async fn test_load_tolerates_bad_rows_by_default() {
    let file = create_temp_file(TABLE);

    let dataset = load_dataset(file.path(), false).await.unwrap();
    assert_eq!(dataset.record_count(), 1);
    assert_eq!(dataset.parse_stats().rows_skipped, 1);
}

#[tokio::test]
async fn test_strict_load_rejects_bad_rows() {
    let file = create_temp_file(TABLE);

    match load_dataset(file.path(), true).await {
        Err(GroundwaterError::RejectedRows {
            rejected,
            total,
            first_issue,
        }) => {
            assert_eq!(rejected, 1);
            assert_eq!(total, 2);
            assert!(first_issue.contains("Water_Level"));
        }
        other => panic!("expected strict rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_file() {
    let result = load_dataset(Path::new("/nonexistent/data.csv"), false).await;
    assert!(matches!(result, Err(GroundwaterError::DataNotFound { .. })));
}

#[tokio::test]
async fn test_empty_file() {
    let file = create_temp_file("");
    let result = load_dataset(file.path(), false).await;
    assert!(matches!(result, Err(GroundwaterError::EmptyInput)));
}
