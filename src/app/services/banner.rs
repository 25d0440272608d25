//! Banner display text derived from the school count
//!
//! The banner surface only needs the number of schools, interpolated into a
//! fixed congratulatory template. It deliberately consumes the cheap
//! count-only query rather than the full parse.

use crate::constants::BANNER_MESSAGE;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Build the banner display string for a school count
///
/// Counts of zero fall back to the bare message with no count suffix, so a
/// failed or empty load degrades to the plain banner instead of showing
/// "총 0개교".
pub fn banner_text(school_count: usize) -> String {
    if school_count > 0 {
        format!("{} - 총 {}개교", BANNER_MESSAGE, school_count)
    } else {
        BANNER_MESSAGE.to_string()
    }
}

/// Banner report for the JSON output surface
#[derive(Debug, Clone, Serialize)]
pub struct BannerReport {
    /// Number of schools counted in the asset
    pub school_count: usize,

    /// Display string with the count interpolated
    pub text: String,

    /// When the report was generated (the board shows a live clock)
    pub generated_at: DateTime<Local>,
}

impl BannerReport {
    /// Build a report from a school count
    pub fn new(school_count: usize) -> Self {
        Self {
            school_count,
            text: banner_text(school_count),
            generated_at: Local::now(),
        }
    }
}
