//! Loader for the concatenated-JSON school coordinate asset
//!
//! The coordinate asset is a single text file containing zero or more JSON
//! object literals with no reliable delimiter between them. This service
//! splits the text back into individual literals, parses each into a
//! validated [`School`] record, and reports every span it had to skip.
//!
//! ## Architecture
//!
//! - [`scanner`] - Brace-depth span scanning with string-literal awareness
//! - [`parser`] - Span-to-record parsing and field validation
//! - [`stats`] - Load results, statistics, and the skip list
//!
//! ## Usage
//!
//! ```rust
//! use gradmap::app::services::record_loader::RecordLoader;
//!
//! # fn example() -> gradmap::Result<()> {
//! let loader = RecordLoader::new();
//! let result = loader.parse_text(
//!     r#"{"schoolName":"A고","address":"서울","coordinates":{"longitude":127.0,"latitude":37.5}}"#,
//! )?;
//!
//! assert_eq!(result.schools.len(), 1);
//! assert_eq!(result.stats.records_skipped, 0);
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod scanner;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use scanner::{Span, scan_spans};
pub use stats::{LoadResult, LoadStats, Skip, SkipKind};

use crate::Result;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Error handling policy for spans that fail to parse or validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Skip the offending span, continue, and report it in the skip list
    #[default]
    SkipAndReport,

    /// Abort the whole load on the first failing span
    Strict,
}

/// Loader turning raw asset text into ordered, validated school records
///
/// The loader is stateless and pure: given the same text it always produces
/// the same result, and concurrent invocations share nothing. Fetching the
/// text is the caller's concern; [`RecordLoader::load_file`] is a thin
/// convenience wrapper for the on-disk case.
#[derive(Debug, Clone, Default)]
pub struct RecordLoader {
    policy: SkipPolicy,
}

impl RecordLoader {
    /// Create a loader with the default skip-and-report policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with an explicit skip policy
    pub fn with_policy(policy: SkipPolicy) -> Self {
        Self { policy }
    }

    /// Read the asset file and parse its content
    pub async fn load_file(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading coordinate asset: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::asset_read(path.display().to_string(), e))?;

        self.parse_text(&content)
    }

    /// Parse raw asset text into records
    ///
    /// Empty input is success with zero records. Under
    /// [`SkipPolicy::SkipAndReport`] this never fails for content reasons;
    /// every bad span is omitted from the result and recorded in
    /// `stats.skips`. Under [`SkipPolicy::Strict`] the first bad span aborts
    /// the load with its error.
    pub fn parse_text(&self, text: &str) -> Result<LoadResult> {
        let start = Instant::now();
        let mut stats = LoadStats::new();
        let mut schools = Vec::new();

        let spans = scanner::scan_spans(text);
        stats.spans_found = spans.len();
        debug!("Scanner located {} candidate spans", spans.len());

        for span in &spans {
            match parser::parse_school_span(span.index, span.text) {
                Ok(school) => {
                    schools.push(school);
                    stats.records_loaded += 1;
                }
                Err(error) => {
                    if self.policy == SkipPolicy::Strict {
                        return Err(error);
                    }
                    warn!("Skipping span {}: {}", span.index, error);
                    stats.records_skipped += 1;
                    stats.skips.push(Skip::from_error(&error));
                }
            }
        }

        stats.load_duration = start.elapsed();
        info!("{}", stats.summary());

        Ok(LoadResult { schools, stats })
    }

    /// Count object literals without parsing them
    ///
    /// This is the cheap query behind the banner label. It runs the same
    /// brace-depth scan as the full parse but skips JSON parsing entirely,
    /// counting only brace-balanced spans. On well-formed input it equals the
    /// length of the full parse's record list; on malformed input it never
    /// panics and reports only the complete spans.
    pub fn count_records(text: &str) -> usize {
        scanner::count_complete_spans(text)
    }
}
