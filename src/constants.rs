//! Application constants for gradmap
//!
//! This module contains the fixed display text, geographic bounds, and
//! map framing values shared by the library and the CLI.

// =============================================================================
// Asset Constants
// =============================================================================

/// Default filename of the school coordinate asset
///
/// The producing tool names its export `coordinates.ndjson` even though the
/// content is not line-delimited: object literals are emitted back-to-back
/// with no reliable separator.
pub const DEFAULT_ASSET_NAME: &str = "coordinates.ndjson";

// =============================================================================
// Geographic Bounds
// =============================================================================

/// Valid coordinate ranges in WGS84 decimal degrees
pub mod bounds {
    pub const LATITUDE_MIN: f64 = -90.0;
    pub const LATITUDE_MAX: f64 = 90.0;
    pub const LONGITUDE_MIN: f64 = -180.0;
    pub const LONGITUDE_MAX: f64 = 180.0;
}

// =============================================================================
// Map Framing
// =============================================================================

/// Initial map center latitude (geographic center of South Korea)
pub const MAP_CENTER_LAT: f64 = 36.6665;

/// Initial map center longitude (geographic center of South Korea)
pub const MAP_CENTER_LON: f64 = 127.878;

/// Initial map zoom level for the country-wide view
pub const MAP_DEFAULT_ZOOM: u8 = 7;

// =============================================================================
// Banner Text
// =============================================================================

/// Fixed congratulatory banner message
pub const BANNER_MESSAGE: &str = "졸업을 축하합니다!";

/// Marker number prefix used in popup labels ("#1", "#2", ...)
pub const MARKER_NUMBER_PREFIX: &str = "#";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a latitude value is finite and within valid bounds
pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (bounds::LATITUDE_MIN..=bounds::LATITUDE_MAX).contains(&latitude)
}

/// Check whether a longitude value is finite and within valid bounds
pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (bounds::LONGITUDE_MIN..=bounds::LONGITUDE_MAX).contains(&longitude)
}
