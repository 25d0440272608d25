//! Gradmap Library
//!
//! A Rust library for loading school coordinate data from the concatenated-JSON
//! export format used by the graduation congratulations map and turning it into
//! validated, display-ready marker data.
//!
//! This library provides tools for:
//! - Splitting a raw text asset into individual JSON object literals without
//!   relying on any delimiter between them
//! - Parsing and validating each literal into an ordered school record
//! - A cheap count-only query that agrees with the full parse
//! - Building numbered map markers and banner display text from the records
//! - Skip-and-report error handling so one bad entry never blanks the map

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod banner;
        pub mod markers;
        pub mod record_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Coordinates, School};
pub use app::services::record_loader::{RecordLoader, SkipPolicy};
pub use config::Config;

/// Result type alias for gradmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for asset loading and record parsing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The raw text asset could not be read
    #[error("Failed to read asset '{path}': {source}")]
    AssetRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A brace-delimited span could not be parsed as a JSON object literal
    #[error("Malformed record at span {index}: {message}")]
    MalformedRecord {
        index: usize,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A parsed object is missing a required field or holds an invalid value
    #[error("Invalid record at span {index}: field '{field}' {message}")]
    Validation {
        index: usize,
        field: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an asset read error with context
    pub fn asset_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::AssetRead {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed record error for a span
    pub fn malformed_record(
        index: usize,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::MalformedRecord {
            index,
            message: message.into(),
            source,
        }
    }

    /// Create a validation error for a named field
    ///
    /// The span index defaults to 0; the loader rewrites it via
    /// [`Error::at_index`] once the record's position is known.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            index: 0,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Attach a span index to a record-level error
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Self::MalformedRecord {
                message, source, ..
            } => Self::MalformedRecord {
                index,
                message,
                source,
            },
            Self::Validation { field, message, .. } => Self::Validation {
                index,
                field,
                message,
            },
            other => other,
        }
    }
}

// Automatic conversion for plain I/O failures
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
