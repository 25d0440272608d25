//! Data models for school coordinate records
//!
//! This module contains the core data structures representing one validated
//! school entry from the coordinate asset. Field names follow the wire format
//! emitted by the producing tool (`schoolName`, `address`, `coordinates`).

use crate::constants::{is_valid_latitude, is_valid_longitude};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Geographic position of a school in WGS84 decimal degrees
///
/// The wire format stores longitude first; field order is irrelevant to the
/// parser but preserved here for faithful re-serialization.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    /// Longitude, required within [-180, 180]
    pub longitude: f64,

    /// Latitude, required within [-90, 90]
    pub latitude: f64,
}

impl Coordinates {
    /// Create coordinates with bounds validation
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinates = Self {
            longitude,
            latitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Validate both components for finiteness and geographic bounds
    pub fn validate(&self) -> Result<()> {
        if !is_valid_latitude(self.latitude) {
            return Err(Error::validation(
                "coordinates.latitude",
                format!(
                    "value {} must be finite and between -90 and 90 degrees",
                    self.latitude
                ),
            ));
        }

        if !is_valid_longitude(self.longitude) {
            return Err(Error::validation(
                "coordinates.longitude",
                format!(
                    "value {} must be finite and between -180 and 180 degrees",
                    self.longitude
                ),
            ));
        }

        Ok(())
    }

    /// Get the position as a (latitude, longitude) tuple
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// One validated school entry from the coordinate asset
///
/// Records are constructed once per load, are immutable thereafter, and keep
/// the order in which their object literals appeared in the source text;
/// marker numbering depends on that order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct School {
    /// Display label for the school (non-empty)
    #[serde(rename = "schoolName")]
    pub name: String,

    /// Free-text address or location description
    pub address: String,

    /// Geographic position of the school
    pub coordinates: Coordinates,
}

impl School {
    /// Create a new school record with validation
    pub fn new(name: String, address: String, coordinates: Coordinates) -> Result<Self> {
        let school = Self {
            name,
            address,
            coordinates,
        };
        school.validate()?;
        Ok(school)
    }

    /// Validate the record for required fields and coordinate bounds
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation(
                "schoolName",
                "must not be empty".to_string(),
            ));
        }

        self.coordinates.validate()?;

        Ok(())
    }

    /// Get the school location as (latitude, longitude)
    pub fn position(&self) -> (f64, f64) {
        self.coordinates.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_school() -> School {
        School {
            name: "서울고등학교".to_string(),
            address: "서울특별시 서초구".to_string(),
            coordinates: Coordinates {
                longitude: 127.0074,
                latitude: 37.4852,
            },
        }
    }

    #[test]
    fn test_school_creation_valid() {
        let school = create_test_school();
        assert_eq!(school.name, "서울고등학교");
        assert!(school.validate().is_ok());
        assert_eq!(school.position(), (37.4852, 127.0074));
    }

    #[test]
    fn test_coordinate_validation() {
        let mut school = create_test_school();

        school.coordinates.latitude = 95.0;
        assert!(school.validate().is_err());

        school.coordinates.latitude = -95.0;
        assert!(school.validate().is_err());

        school.coordinates.latitude = 37.4852;
        school.coordinates.longitude = 185.0;
        assert!(school.validate().is_err());

        school.coordinates.longitude = -185.0;
        assert!(school.validate().is_err());
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        assert!(Coordinates::new(f64::NAN, 127.0).is_err());
        assert!(Coordinates::new(37.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut school = create_test_school();

        school.name = "".to_string();
        assert!(school.validate().is_err());

        school.name = "   ".to_string();
        let err = school.validate().unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "schoolName"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_address_allowed() {
        let mut school = create_test_school();
        school.address = "".to_string();
        assert!(school.validate().is_ok());
    }

    #[test]
    fn test_serde_wire_names() {
        let school = create_test_school();
        let json = serde_json::to_string(&school).unwrap();
        assert!(json.contains("\"schoolName\""));
        assert!(json.contains("\"coordinates\""));

        let deserialized: School = serde_json::from_str(&json).unwrap();
        assert_eq!(school, deserialized);
    }
}
