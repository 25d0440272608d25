//! Command implementations for the gradmap CLI
//!
//! Each command lives in its own module; shared logging, configuration, and
//! output plumbing is in [`shared`].

pub mod banner;
pub mod markers;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for gradmap
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `markers`: full parse into numbered map markers
/// - `banner`: count-only query into banner display text
/// - `validate`: full parse with a skip report
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Markers(markers_args) => markers::run_markers(markers_args).await,
        Commands::Banner(banner_args) => banner::run_banner(banner_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
    }
}
