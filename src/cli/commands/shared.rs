//! Shared components for CLI commands
//!
//! Common logging, configuration, and output plumbing used by the command
//! implementations.

use crate::config::Config;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// Quiet mode drops timestamps and keeps the compact format so scripted
/// callers get clean stdout and minimal stderr.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gradmap={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration in layers: file, then CLI argument overrides
pub fn load_configuration(
    config_file: Option<&Path>,
    input: Option<&Path>,
    strict: bool,
    log_level: &str,
) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load_layered(config_file)?;

    // CLI flags win over the file
    if let Some(input) = input {
        config.asset.path = input.to_path_buf();
    }
    if strict {
        config.loading.strict = true;
    }
    config.logging.level = log_level.to_string();

    config.validate()?;

    Ok(config)
}

/// Write rendered output to a file, or stdout when no file was requested
pub fn write_output(output_file: Option<&Path>, content: &str) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write output to {}", path.display()), e)
            })?;
            info!("Output written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Read the coordinate asset into memory
pub fn read_asset(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::asset_read(path.display().to_string(), e))
}
