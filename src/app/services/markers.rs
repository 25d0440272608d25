//! Map marker construction from ordered school records
//!
//! The map surface places one marker per record. Markers carry a 1-based
//! number derived from source order (the asset's insertion order is the
//! display order) and a popup label combining number, name, and address.

use crate::app::models::School;
use crate::constants::MARKER_NUMBER_PREFIX;
use serde::Serialize;
use serde_json::{Value, json};

/// One display marker for the map surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// 1-based display number, assigned in source order
    pub number: usize,

    /// School display name
    pub name: String,

    /// Free-text address shown in the popup
    pub address: String,

    /// Marker latitude in decimal degrees
    pub latitude: f64,

    /// Marker longitude in decimal degrees
    pub longitude: f64,
}

impl Marker {
    /// Popup label in the original display shape: number, name, address
    pub fn popup_label(&self) -> String {
        format!(
            "{}{} {} ({})",
            MARKER_NUMBER_PREFIX, self.number, self.name, self.address
        )
    }

    /// One CSV data line: number,name,address,latitude,longitude
    ///
    /// Fields containing commas or quotes are quoted. Addresses are free
    /// text, so this is not optional polish.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.number,
            csv_field(&self.name),
            csv_field(&self.address),
            self.latitude,
            self.longitude
        )
    }
}

/// CSV header matching [`Marker::csv_line`]
pub const MARKER_CSV_HEADER: &str = "number,name,address,latitude,longitude";

/// Build numbered markers from records, preserving source order
pub fn build_markers(schools: &[School]) -> Vec<Marker> {
    schools
        .iter()
        .enumerate()
        .map(|(i, school)| Marker {
            number: i + 1,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.coordinates.latitude,
            longitude: school.coordinates.longitude,
        })
        .collect()
}

/// Assemble markers into a GeoJSON FeatureCollection
///
/// GeoJSON positions are [longitude, latitude] per RFC 7946.
pub fn to_geojson(markers: &[Marker]) -> Value {
    let features: Vec<Value> = markers
        .iter()
        .map(|marker| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [marker.longitude, marker.latitude],
                },
                "properties": {
                    "number": marker.number,
                    "name": marker.name,
                    "address": marker.address,
                    "popup": marker.popup_label(),
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Quote a CSV field when it contains a delimiter, quote, or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Coordinates;

    fn create_test_schools() -> Vec<School> {
        vec![
            School::new(
                "A고".to_string(),
                "서울".to_string(),
                Coordinates::new(37.5, 127.0).unwrap(),
            )
            .unwrap(),
            School::new(
                "B고".to_string(),
                "부산".to_string(),
                Coordinates::new(35.1, 129.0).unwrap(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_marker_numbering_follows_source_order() {
        let markers = build_markers(&create_test_schools());

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].number, 1);
        assert_eq!(markers[0].name, "A고");
        assert_eq!(markers[1].number, 2);
        assert_eq!(markers[1].name, "B고");
    }

    #[test]
    fn test_popup_label() {
        let markers = build_markers(&create_test_schools());
        assert_eq!(markers[0].popup_label(), "#1 A고 (서울)");
    }

    #[test]
    fn test_empty_records_yield_empty_markers() {
        assert!(build_markers(&[]).is_empty());
    }

    #[test]
    fn test_geojson_shape() {
        let markers = build_markers(&create_test_schools());
        let geojson = to_geojson(&markers);

        assert_eq!(geojson["type"], "FeatureCollection");
        let features = geojson["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);

        // RFC 7946: longitude first
        assert_eq!(features[0]["geometry"]["coordinates"][0], 127.0);
        assert_eq!(features[0]["geometry"]["coordinates"][1], 37.5);
        assert_eq!(features[1]["properties"]["number"], 2);
    }

    #[test]
    fn test_csv_line_quotes_commas() {
        let school = School::new(
            "C고".to_string(),
            "대전, 유성구".to_string(),
            Coordinates::new(36.3, 127.3).unwrap(),
        )
        .unwrap();

        let markers = build_markers(&[school]);
        assert_eq!(markers[0].csv_line(), "1,C고,\"대전, 유성구\",36.3,127.3");
    }
}
