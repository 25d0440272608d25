//! Command-line argument definitions for gradmap
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand reads the same coordinate asset; they differ in which query
//! they run against it and how they present the result.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the gradmap coordinate data processor
///
/// Loads the concatenated-JSON school coordinate export and produces
/// validated marker and banner data for the map site.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gradmap",
    version,
    about = "Convert concatenated-JSON school coordinate exports into validated map data",
    long_about = "Processes the school coordinate asset used by the graduation congratulations \
                  map site. The asset contains JSON object literals emitted back-to-back with \
                  no reliable delimiter; gradmap splits, parses, and validates them, then emits \
                  numbered map markers, banner display text, or a validation report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Produce numbered map markers from the full parse
    Markers(MarkersArgs),
    /// Produce the banner display text from the count-only query
    Banner(BannerArgs),
    /// Parse the whole asset and report every skipped span
    Validate(ValidateArgs),
}

/// Arguments for the markers command
#[derive(Debug, Clone, Parser)]
pub struct MarkersArgs {
    /// Path to the coordinate asset file
    ///
    /// If not specified, uses the configured asset path
    /// (default: ./coordinates.ndjson).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the coordinate asset file"
    )]
    pub input: Option<PathBuf>,

    /// Output format for the marker listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for markers"
    )]
    pub output_format: OutputFormat,

    /// Output file for the marker listing
    ///
    /// If not specified, writes to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the marker listing"
    )]
    pub output_file: Option<PathBuf>,

    /// Abort on the first bad span instead of skipping it
    #[arg(long = "strict", help = "Abort on the first bad span")]
    pub strict: bool,

    /// Path to configuration file (TOML format)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the banner command
#[derive(Debug, Clone, Parser)]
pub struct BannerArgs {
    /// Path to the coordinate asset file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the coordinate asset file"
    )]
    pub input: Option<PathBuf>,

    /// Output format for the banner text
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the banner (human or json)"
    )]
    pub output_format: OutputFormat,

    /// Path to configuration file (TOML format)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the coordinate asset file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the coordinate asset file"
    )]
    pub input: Option<PathBuf>,

    /// Output format for the validation report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report (human or json)"
    )]
    pub output_format: OutputFormat,

    /// Treat any bad span as fatal (abort on the first one)
    #[arg(long = "strict", help = "Abort on the first bad span")]
    pub strict: bool,

    /// Path to configuration file (TOML format)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
    /// GeoJSON FeatureCollection for map tooling
    Geojson,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map a verbosity count to a log level filter
fn verbosity_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Check an explicitly provided input path
fn validate_input(input: &Option<PathBuf>) -> Result<()> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

impl MarkersArgs {
    /// Validate the markers command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose, self.quiet)
    }
}

impl BannerArgs {
    /// Validate the banner command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;

        match self.output_format {
            OutputFormat::Human | OutputFormat::Json => Ok(()),
            other => Err(Error::configuration(format!(
                "Banner output supports human or json, not {:?}",
                other
            ))),
        }
    }

    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose, false)
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;

        match self.output_format {
            OutputFormat::Human | OutputFormat::Json => Ok(()),
            other => Err(Error::configuration(format!(
                "Validation report supports human or json, not {:?}",
                other
            ))),
        }
    }

    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose, false)
    }
}
