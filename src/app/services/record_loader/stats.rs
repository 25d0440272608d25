//! Loading statistics and result structures
//!
//! These types track how a load went: how many spans the scanner found, how
//! many records survived parsing and validation, and exactly which spans were
//! skipped and why. The skip list is always populated so a caller that wants
//! all-or-nothing behavior can treat any entry as fatal.

use crate::Error;
use crate::app::models::School;
use serde::{Deserialize, Serialize};

/// Result of loading the coordinate asset
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully parsed records, in source order
    pub schools: Vec<School>,

    /// Loading statistics including the skip list
    pub stats: LoadStats,
}

/// Why a span was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// The span could not be parsed as a JSON object literal
    Malformed,
    /// The span parsed but failed field or coordinate validation
    Invalid,
}

/// One skipped span with its position and reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skip {
    /// Zero-based span index within the source text
    pub index: usize,

    /// Whether the span was malformed or merely invalid
    pub kind: SkipKind,

    /// Human-readable reason, including the field name or parse diagnostic
    pub reason: String,
}

impl Skip {
    /// Build a skip entry from a record-level error
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::MalformedRecord { index, .. } => Self {
                index: *index,
                kind: SkipKind::Malformed,
                reason: error.to_string(),
            },
            Error::Validation { index, .. } => Self {
                index: *index,
                kind: SkipKind::Invalid,
                reason: error.to_string(),
            },
            other => Self {
                index: 0,
                kind: SkipKind::Malformed,
                reason: other.to_string(),
            },
        }
    }
}

/// Statistics for one load operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStats {
    /// Number of candidate spans the scanner located
    pub spans_found: usize,

    /// Number of records successfully parsed and validated
    pub records_loaded: usize,

    /// Number of spans skipped
    pub records_skipped: usize,

    /// Every skipped span with its index and reason
    pub skips: Vec<Skip>,

    /// Time taken for the load
    #[serde(skip)]
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            spans_found: 0,
            records_loaded: 0,
            records_skipped: 0,
            skips: Vec::new(),
            load_duration: std::time::Duration::ZERO,
        }
    }

    /// Check whether any spans were skipped
    pub fn has_skips(&self) -> bool {
        !self.skips.is_empty()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.spans_found == 0 {
            100.0
        } else {
            (self.records_loaded as f64 / self.spans_found as f64) * 100.0
        }
    }

    /// Get a one-line summary of the load
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} of {} spans ({} skipped) in {:.2}ms",
            self.records_loaded,
            self.spans_found,
            self.records_skipped,
            self.load_duration.as_secs_f64() * 1000.0
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
