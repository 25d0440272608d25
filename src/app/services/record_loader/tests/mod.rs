//! Shared test fixtures for record loader tests

pub mod stats_tests;

/// One well-formed record as the producing tool emits it
pub const SPAN_A: &str =
    r#"{"schoolName":"A고","address":"서울","coordinates":{"longitude":127.0,"latitude":37.5}}"#;

/// A second well-formed record for ordering tests
pub const SPAN_B: &str =
    r#"{"schoolName":"B고","address":"부산","coordinates":{"longitude":129.0,"latitude":35.1}}"#;

/// A record whose address contains literal braces, the case a `}{` pattern
/// split is known to corrupt
pub const SPAN_BRACES: &str = r#"{"schoolName":"C고","address":"Building { A }","coordinates":{"longitude":126.7,"latitude":35.9}}"#;

/// Concatenate spans back-to-back with no separator
pub fn concat(spans: &[&str]) -> String {
    spans.concat()
}
