//! Record parsing from candidate spans
//!
//! Each span located by the scanner is parsed as one JSON object literal and
//! converted into a validated [`School`] record. Syntax failures become
//! malformed-record errors carrying the span index and the parse diagnostic;
//! missing, mistyped, or out-of-range fields become validation errors naming
//! the offending field.

use crate::app::models::{Coordinates, School};
use crate::{Error, Result};
use serde_json::Value;

/// Parse one candidate span into a validated school record
///
/// `index` is the span's ordinal within the input and is attached to every
/// error produced here.
pub fn parse_school_span(index: usize, text: &str) -> Result<School> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        Error::malformed_record(index, format!("not a valid JSON object literal: {}", e), Some(e))
    })?;

    let object = value.as_object().ok_or_else(|| {
        Error::malformed_record(index, "JSON value is not an object literal", None)
    })?;

    let name = require_string(object, "schoolName").map_err(|e| e.at_index(index))?;
    let address = require_string(object, "address").map_err(|e| e.at_index(index))?;

    let coordinates = object
        .get("coordinates")
        .ok_or_else(|| Error::validation("coordinates", "is missing"))
        .and_then(|v| {
            v.as_object()
                .ok_or_else(|| Error::validation("coordinates", "must be an object"))
        })
        .map_err(|e| e.at_index(index))?;

    let latitude = require_number(coordinates, "coordinates.latitude", "latitude")
        .map_err(|e| e.at_index(index))?;
    let longitude = require_number(coordinates, "coordinates.longitude", "longitude")
        .map_err(|e| e.at_index(index))?;

    // Bounds and non-empty-name checks live in the model constructors
    let coordinates = Coordinates::new(latitude, longitude).map_err(|e| e.at_index(index))?;
    School::new(name, address, coordinates).map_err(|e| e.at_index(index))
}

/// Extract a required string field from an object
fn require_string(object: &serde_json::Map<String, Value>, field: &str) -> Result<String> {
    match object.get(field) {
        None => Err(Error::validation(field, "is missing")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::validation(
            field,
            format!("must be a string, found {}", type_name(other)),
        )),
    }
}

/// Extract a required numeric field from an object
///
/// `field` is the full dotted path for error reporting; `key` is the name
/// within the containing object.
fn require_number(
    object: &serde_json::Map<String, Value>,
    field: &str,
    key: &str,
) -> Result<f64> {
    match object.get(key) {
        None => Err(Error::validation(field, "is missing")),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| Error::validation(field, "is not representable as a float")),
        Some(other) => Err(Error::validation(
            field,
            format!("must be a number, found {}", type_name(other)),
        )),
    }
}

/// Short JSON type name for error messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
