//! Integration tests for the record loading pipeline
//!
//! Exercises the full path from a coordinate asset file on disk through the
//! loader to the marker and banner surfaces, including the degraded paths
//! for malformed and invalid entries.

use gradmap::app::services::banner::banner_text;
use gradmap::app::services::markers::build_markers;
use gradmap::app::services::record_loader::SkipKind;
use gradmap::{Error, RecordLoader, SkipPolicy};
use std::fs;
use tempfile::TempDir;

/// A realistic export: three objects back to back, no separators, one
/// address containing braces.
const SAMPLE_ASSET: &str = concat!(
    r#"{"schoolName": "서울고등학교", "address": "서울특별시 서초구", "coordinates": {"longitude": 127.0107, "latitude": 37.4923}}"#,
    r#"{"schoolName": "부산고등학교", "address": "부산광역시 동구", "coordinates": {"longitude": 129.0403, "latitude": 35.1180}}"#,
    r#"{"schoolName": "대전고등학교", "address": "대전 {본관} 옆", "coordinates": {"longitude": 127.4255, "latitude": 36.3219}}"#
);

fn write_asset(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("coordinates.ndjson");
    fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_load_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let asset = write_asset(&temp_dir, SAMPLE_ASSET);

    let loader = RecordLoader::new();
    let result = loader.load_file(&asset).await.unwrap();

    assert_eq!(result.stats.spans_found, 3);
    assert_eq!(result.stats.records_loaded, 3);
    assert!(!result.stats.has_skips());

    // Source order is preserved
    assert_eq!(result.schools[0].name, "서울고등학교");
    assert_eq!(result.schools[1].name, "부산고등학교");
    assert_eq!(result.schools[2].name, "대전고등학교");
    assert_eq!(result.schools[2].address, "대전 {본관} 옆");
    assert_eq!(result.schools[0].coordinates.position(), (37.4923, 127.0107));
}

#[tokio::test]
async fn test_markers_and_banner_from_same_asset() {
    let temp_dir = TempDir::new().unwrap();
    let asset = write_asset(&temp_dir, SAMPLE_ASSET);

    let loader = RecordLoader::new();
    let result = loader.load_file(&asset).await.unwrap();

    let markers = build_markers(&result.schools);
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0].number, 1);
    assert_eq!(
        markers[0].popup_label(),
        "#1 서울고등학교 (서울특별시 서초구)"
    );

    // The banner consumes the cheap count, which must agree with the full
    // parse on a well-formed asset.
    let text = fs::read_to_string(&asset).unwrap();
    let count = RecordLoader::count_records(&text);
    assert_eq!(count, result.schools.len());
    assert_eq!(banner_text(count), "졸업을 축하합니다! - 총 3개교");
}

#[tokio::test]
async fn test_bad_span_is_skipped_and_reported() {
    let broken = SAMPLE_ASSET.replacen(r#""latitude": 35.1180"#, r#""latitude": "north""#, 1);
    let temp_dir = TempDir::new().unwrap();
    let asset = write_asset(&temp_dir, &broken);

    let loader = RecordLoader::new();
    let result = loader.load_file(&asset).await.unwrap();

    assert_eq!(result.stats.spans_found, 3);
    assert_eq!(result.stats.records_loaded, 2);
    assert_eq!(result.stats.records_skipped, 1);

    let skip = &result.stats.skips[0];
    assert_eq!(skip.index, 1);
    assert_eq!(skip.kind, SkipKind::Invalid);
    assert!(skip.reason.contains("coordinates.latitude"));

    // Neighbors survive
    assert_eq!(result.schools[0].name, "서울고등학교");
    assert_eq!(result.schools[1].name, "대전고등학교");
}

#[tokio::test]
async fn test_strict_policy_aborts_on_bad_span() {
    let broken = SAMPLE_ASSET.replacen(r#""latitude": 35.1180"#, r#""latitude": "north""#, 1);
    let temp_dir = TempDir::new().unwrap();
    let asset = write_asset(&temp_dir, &broken);

    let loader = RecordLoader::with_policy(SkipPolicy::Strict);
    let error = loader.load_file(&asset).await.unwrap_err();

    match error {
        Error::Validation { index, field, .. } => {
            assert_eq!(index, 1);
            assert_eq!(field, "coordinates.latitude");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_truncated_asset_degrades_not_fails() {
    // Cut the file mid-object: the final span is incomplete
    let truncated = &SAMPLE_ASSET[..SAMPLE_ASSET.len() - 20];
    let temp_dir = TempDir::new().unwrap();
    let asset = write_asset(&temp_dir, truncated);

    let loader = RecordLoader::new();
    let result = loader.load_file(&asset).await.unwrap();

    assert_eq!(result.stats.records_loaded, 2);
    assert_eq!(result.stats.records_skipped, 1);
    assert_eq!(result.stats.skips[0].kind, SkipKind::Malformed);

    // The count query only counts complete objects
    let text = fs::read_to_string(&asset).unwrap();
    assert_eq!(RecordLoader::count_records(&text), 2);
}

#[tokio::test]
async fn test_missing_asset_is_a_read_error() {
    let loader = RecordLoader::new();
    let error = loader
        .load_file(std::path::Path::new("/nonexistent/coordinates.ndjson"))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::AssetRead { .. }));
}

#[tokio::test]
async fn test_empty_asset_yields_empty_map_and_bare_banner() {
    let temp_dir = TempDir::new().unwrap();
    let asset = write_asset(&temp_dir, "");

    let loader = RecordLoader::new();
    let result = loader.load_file(&asset).await.unwrap();

    assert!(result.schools.is_empty());
    assert!(build_markers(&result.schools).is_empty());
    assert_eq!(banner_text(0), "졸업을 축하합니다!");
}
