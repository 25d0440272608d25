//! Tests for load statistics and the skip list

use crate::Error;
use crate::app::services::record_loader::stats::{LoadStats, Skip, SkipKind};

#[test]
fn test_load_stats_new() {
    let stats = LoadStats::new();
    assert_eq!(stats.spans_found, 0);
    assert_eq!(stats.records_loaded, 0);
    assert!(!stats.has_skips());
    assert_eq!(stats.success_rate(), 100.0);
}

#[test]
fn test_success_rate() {
    let mut stats = LoadStats::new();
    stats.spans_found = 4;
    stats.records_loaded = 3;
    stats.records_skipped = 1;

    assert_eq!(stats.success_rate(), 75.0);
}

#[test]
fn test_summary_line() {
    let mut stats = LoadStats::new();
    stats.spans_found = 10;
    stats.records_loaded = 9;
    stats.records_skipped = 1;

    let summary = stats.summary();
    assert!(summary.contains("9 of 10 spans"));
    assert!(summary.contains("1 skipped"));
}

#[test]
fn test_skip_from_malformed_error() {
    let error = Error::malformed_record(2, "unexpected end of input", None);
    let skip = Skip::from_error(&error);

    assert_eq!(skip.index, 2);
    assert_eq!(skip.kind, SkipKind::Malformed);
    assert!(skip.reason.contains("span 2"));
}

#[test]
fn test_skip_from_validation_error() {
    let error = Error::validation("coordinates.latitude", "is missing").at_index(5);
    let skip = Skip::from_error(&error);

    assert_eq!(skip.index, 5);
    assert_eq!(skip.kind, SkipKind::Invalid);
    assert!(skip.reason.contains("coordinates.latitude"));
}

#[test]
fn test_stats_serialize_for_report() {
    let mut stats = LoadStats::new();
    stats.spans_found = 2;
    stats.records_loaded = 1;
    stats.records_skipped = 1;
    stats.skips.push(Skip {
        index: 1,
        kind: SkipKind::Malformed,
        reason: "not a valid JSON object literal".to_string(),
    });

    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("\"spans_found\":2"));
    assert!(json.contains("\"kind\":\"malformed\""));
}
