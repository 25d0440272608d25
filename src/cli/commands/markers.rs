//! Markers command implementation
//!
//! Runs the full parse over the coordinate asset and emits the numbered map
//! markers in the requested output format.

use crate::app::services::markers::{MARKER_CSV_HEADER, Marker, build_markers, to_geojson};
use crate::app::services::record_loader::{LoadStats, RecordLoader, SkipPolicy};
use crate::cli::args::{MarkersArgs, OutputFormat};
use crate::cli::commands::shared;
use crate::constants::{MAP_CENTER_LAT, MAP_CENTER_LON, MAP_DEFAULT_ZOOM};
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;
use tracing::info;

/// Run the markers command
pub async fn run_markers(args: MarkersArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

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
        "Building markers from {} (policy: {:?})",
        config.asset.path.display(),
        policy
    );

    let loader = RecordLoader::with_policy(policy);
    let result = loader.load_file(&config.asset.path).await?;
    let markers = build_markers(&result.schools);

    let rendered = match args.output_format {
        OutputFormat::Human => render_human(&markers, &result.stats),
        OutputFormat::Json => serialize_pretty(&json!({
            "markers": markers,
            "stats": result.stats,
        }))?,
        OutputFormat::Csv => render_csv(&markers),
        OutputFormat::Geojson => serialize_pretty(&to_geojson(&markers))?,
    };

    shared::write_output(args.output_file.as_deref(), &rendered)?;
    Ok(())
}

fn serialize_pretty(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::io("Failed to serialize output".to_string(), std::io::Error::other(e)))
}

fn render_human(markers: &[Marker], stats: &LoadStats) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{}", "School Coordinate Markers".bold()));
    lines.push("=========================".to_string());
    lines.push(String::new());

    if markers.is_empty() {
        lines.push("No markers to display.".yellow().to_string());
    } else {
        for marker in markers {
            lines.push(format!(
                "  {}  [{}, {}]",
                marker.popup_label(),
                marker.latitude,
                marker.longitude
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Map center: [{}, {}], zoom {}",
        MAP_CENTER_LAT, MAP_CENTER_LON, MAP_DEFAULT_ZOOM
    ));
    lines.push(stats.summary());

    if stats.has_skips() {
        lines.push(format!(
            "{}",
            format!("{} span(s) skipped, run `gradmap validate` for details", stats.records_skipped)
                .yellow()
        ));
    }

    lines.join("\n")
}

fn render_csv(markers: &[Marker]) -> String {
    let mut lines = vec![MARKER_CSV_HEADER.to_string()];
    lines.extend(markers.iter().map(Marker::csv_line));
    lines.join("\n")
}
