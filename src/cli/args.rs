//! Command-line argument definitions for the inventory processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::{Error, Result};

/// CLI arguments for the inventory processor
///
/// Cleans, validates and summarizes warehouse inventory data supplied as
/// delimited text, producing an ordered per-location stock summary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "inventory-processor",
    version,
    about = "Clean, validate and summarize warehouse inventory CSV files",
    long_about = "Processes a warehouse inventory CSV (code, quantity, location) into a \
                  summarized dataset: malformed rows are filtered out, duplicate \
                  (code, bay, shelf) entries are merged with their quantities summed, \
                  and the result is ordered by bay and shelf."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the inventory processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process an inventory file and write the summarized CSV (main command)
    Process(ProcessArgs),
    /// Check an inventory file without writing output
    Validate(ValidateArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input inventory CSV file
    ///
    /// Expected columns: product code, quantity, location ("<bay> <shelf>").
    #[arg(value_name = "FILE", help = "Input inventory CSV file")]
    pub input: PathBuf,

    /// Output path for the summarized CSV
    ///
    /// Defaults to ./sorted_products.csv if not specified.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the summarized CSV"
    )]
    pub output: Option<PathBuf>,

    /// Treat the first row as data rather than a header
    ///
    /// By default the first row is assumed to be a header and skipped.
    #[arg(long = "no-header", help = "Input has no header row")]
    pub no_header: bool,

    /// Suppress the product table, print only the summary line
    #[arg(short = 'q', long = "quiet", help = "Suppress table output")]
    pub quiet: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input inventory CSV file
    #[arg(value_name = "FILE", help = "Input inventory CSV file")]
    pub input: PathBuf,

    /// Treat the first row as data rather than a header
    #[arg(long = "no-header", help = "Input has no header row")]
    pub no_header: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        let input = match &self.command {
            Some(Commands::Process(args)) => &args.input,
            Some(Commands::Validate(args)) => &args.input,
            None => return Ok(()),
        };

        if !input.exists() {
            return Err(Error::configuration(format!(
                "input file not found: {}",
                input.display()
            )));
        }

        Ok(())
    }

    /// Log level derived from verbosity flags
    pub fn log_level(&self) -> &'static str {
        let verbose = match &self.command {
            Some(Commands::Process(args)) => args.verbose,
            Some(Commands::Validate(args)) => args.verbose,
            None => 0,
        };

        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl ProcessArgs {
    /// Build the pipeline configuration from these arguments
    pub fn to_config(&self) -> PipelineConfig {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME));

        PipelineConfig::default()
            .with_header(!self.no_header)
            .with_output_path(output)
    }
}

impl ValidateArgs {
    /// Build the pipeline configuration from these arguments
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_header(!self.no_header)
            .without_output()
    }
}
