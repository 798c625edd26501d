//! Tests for water-level status classification

use crate::analytics::status::{StatusTier, classify_status};

#[test]
fn test_tier_boundaries() {
    assert_eq!(StatusTier::classify(8.0), StatusTier::Safe);
    assert_eq!(StatusTier::classify(8.01), StatusTier::Moderate);
    assert_eq!(StatusTier::classify(15.0), StatusTier::Moderate);
    assert_eq!(StatusTier::classify(15.01), StatusTier::Critical);
}

#[test]
fn test_classification_is_total() {
    for level in [-3.0, 0.0, 4.2, 8.0, 11.0, 15.0, 22.5, 1000.0, f64::NAN] {
        let tier = StatusTier::classify(level);
        let matches = [
            level <= 8.0,
            level > 8.0 && level <= 15.0,
            !(level <= 15.0),
        ];
        assert_eq!(
            matches.iter().filter(|m| **m).count(),
            1,
            "level {} matched more or fewer than one branch",
            level
        );
        let expected = if matches[0] {
            StatusTier::Safe
        } else if matches[1] {
            StatusTier::Moderate
        } else {
            StatusTier::Critical
        };
        assert_eq!(tier, expected);
    }
}

#[test]
fn test_status_report_text() {
    let report = classify_status(18.0);
    assert_eq!(report.tier, StatusTier::Critical);
    assert_eq!(report.label, "CRITICAL");
    assert!(report.description.contains("Urgent conservation"));

    let report = classify_status(10.0);
    assert_eq!(report.label, "MODERATE");
    assert!(report.description.contains("rainwater harvesting"));

    let report = classify_status(3.0);
    assert_eq!(report.to_owned().tier.to_string(), "SAFE");
    assert!(report.description.contains("healthy"));
}

#[test]
fn test_tier_serializes_lowercase() {
    let json = serde_json::to_string(&StatusTier::Moderate).unwrap();
    assert_eq!(json, "\"moderate\"");
}
