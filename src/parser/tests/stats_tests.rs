//! Tests for parsing statistics functionality

use crate::error::RowError;
use crate::parser::stats::ParseStats;

#[test]
fn test_parse_stats_calculation() {
    let mut stats = ParseStats::new();
    stats.total_rows = 4;
    stats.rows_parsed = 3;
    stats.add_issue(
        5,
        RowError::InvalidYear {
            value: "n/a".to_string(),
        },
    );

    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(stats.success_rate(), 75.0);
    assert!(!stats.is_clean());
    assert_eq!(stats.issues[0].to_string(), "line 5: invalid year: 'n/a'");
    assert_eq!(stats.summary(), "3 of 4 rows parsed (75.0%), 1 skipped");
}

#[test]
fn test_parse_stats_empty() {
    let stats = ParseStats::new();

    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.rows_parsed, 0);
    assert_eq!(stats.rows_skipped, 0);
    assert!(stats.issues.is_empty());
    assert_eq!(stats.success_rate(), 0.0);
    assert!(stats.is_clean());
}
