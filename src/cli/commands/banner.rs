//! Banner command implementation
//!
//! Produces the congratulatory banner text from the count-only query. This
//! command never runs the full parse; it answers from the cheap span count
//! the way the display board does.

use crate::app::services::banner::BannerReport;
use crate::app::services::record_loader::RecordLoader;
use crate::cli::args::{BannerArgs, OutputFormat};
use crate::cli::commands::shared;
use crate::{Error, Result};
use tracing::info;

/// Run the banner command
pub async fn run_banner(args: BannerArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), false)?;

    let config = shared::load_configuration(
        args.config_file.as_deref(),
        args.input.as_deref(),
        false,
        args.get_log_level(),
    )?;

    let text = shared::read_asset(&config.asset.path)?;
    let count = RecordLoader::count_records(&text);
    info!(
        "Counted {} school record(s) in {}",
        count,
        config.asset.path.display()
    );

    let report = BannerReport::new(count);

    match args.output_format {
        OutputFormat::Human => println!("{}", report.text),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&report).map_err(|e| {
                Error::io(
                    "Failed to serialize banner report".to_string(),
                    std::io::Error::other(e),
                )
            })?;
            println!("{}", rendered);
        }
        // Rejected by args.validate()
        other => {
            return Err(Error::configuration(format!(
                "Banner output supports human or json, not {:?}",
                other
            )));
        }
    }

    Ok(())
}
