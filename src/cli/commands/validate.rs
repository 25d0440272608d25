//! Validate command implementation
//!
//! Parses the whole asset and reports every span that was skipped, with its
//! position and diagnostic. With `--strict` the loader aborts on the first
//! bad span instead, so the process exits non-zero on any defect.

use crate::app::services::record_loader::{LoadResult, RecordLoader, SkipPolicy};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::commands::shared;
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;
use tracing::info;

/// Run the validate command
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), false)?;

    let config = shared::load_configuration(
        args.config_file.as_deref(),
        args.input.as_deref(),
        args.strict,
        args.get_log_level(),
    )?;

    let policy = if config.loading.strict {
        SkipPolicy::Strict
    } else {
        SkipPolicy::SkipAndReport
    };

    info!(
        "Validating {} (policy: {:?})",
        config.asset.path.display(),
        policy
    );

    let loader = RecordLoader::with_policy(policy);
    let result = loader.load_file(&config.asset.path).await?;

    // Agreement check between the cheap count and the full parse. On a
    // well-formed asset these are equal; a difference means bad spans.
    let text = shared::read_asset(&config.asset.path)?;
    let quick_count = RecordLoader::count_records(&text);

    match args.output_format {
        OutputFormat::Human => print_human_report(&config.asset.path, &result, quick_count),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&json!({
                "asset": config.asset.path,
                "quick_count": quick_count,
                "stats": result.stats,
            }))
            .map_err(|e| {
                Error::io(
                    "Failed to serialize validation report".to_string(),
                    std::io::Error::other(e),
                )
            })?;
            println!("{}", rendered);
        }
        other => {
            return Err(Error::configuration(format!(
                "Validation report supports human or json, not {:?}",
                other
            )));
        }
    }

    Ok(())
}

fn print_human_report(asset: &std::path::Path, result: &LoadResult, quick_count: usize) {
    println!("{}", "Coordinate Asset Validation".bold());
    println!("===========================");
    println!();
    println!("Asset: {}", asset.display());
    println!("Spans found: {}", result.stats.spans_found);
    println!("Records loaded: {}", result.stats.records_loaded);
    println!("Quick count: {}", quick_count);
    println!();

    if result.stats.has_skips() {
        println!("{}", "Skipped spans:".yellow().bold());
        for skip in &result.stats.skips {
            println!(
                "  {} span {} ({:?}): {}",
                "SKIPPED".red(),
                skip.index,
                skip.kind,
                skip.reason
            );
        }
        println!();
        println!("{}", result.stats.summary().yellow());
    } else {
        println!("{}", result.stats.summary().green());
        if quick_count == result.stats.records_loaded {
            println!("{}", "Quick count agrees with the full parse.".green());
        }
    }

    if quick_count != result.stats.records_loaded {
        println!(
            "{}",
            format!(
                "Quick count ({}) differs from loaded records ({}); the asset is not well formed.",
                quick_count, result.stats.records_loaded
            )
            .yellow()
        );
    }
}
