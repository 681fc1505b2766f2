//! Command implementations for the inventory processor CLI
//!
//! This module contains the command execution logic, result display and
//! logging setup for the CLI interface.

use std::fs::File;
use std::path::Path;

use colored::*;
use tracing::{debug, info};

use crate::app::services::export::write_products_file;
use crate::app::services::record_pipeline::{process_reader, PipelineResult};
use crate::cli::args::{Args, Commands, ProcessArgs, ValidateArgs};
use crate::config::PipelineConfig;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Main command runner for the inventory processor
///
/// Sets up logging, validates arguments and dispatches to the requested
/// subcommand.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    match args.command {
        Some(Commands::Process(process_args)) => run_process(&process_args),
        Some(Commands::Validate(validate_args)) => run_validate(&validate_args),
        None => Ok(()),
    }
}

/// Process an inventory file: summarize, display and write the output CSV
fn run_process(args: &ProcessArgs) -> Result<()> {
    let config = args.to_config();
    info!("Processing inventory file: {}", args.input.display());

    let result = process_file(&args.input, &config)?;

    if !args.quiet {
        display_products(&result);
    }
    display_summary(&result);

    if config.write_output {
        write_products_file(&config.output_path, &result.products)?;
        println!(
            "{} {}",
            "Summarized CSV written to".green(),
            config.output_path.display()
        );
    }

    Ok(())
}

/// Validate an inventory file without writing output
///
/// Runs the same clean and parse stages as processing, then reports what
/// would be skipped or rejected instead of producing a file.
fn run_validate(args: &ValidateArgs) -> Result<()> {
    let config = args.to_config();
    info!("Validating inventory file: {}", args.input.display());

    let result = match process_file(&args.input, &config) {
        Ok(result) => result,
        Err(e) if e.is_parse_error() => {
            println!("{} {}", "File is structurally invalid:".red(), e);
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    if result.stats.skipped.is_empty() {
        println!("{}", "All rows cleaned successfully".green());
    } else {
        println!(
            "{}",
            format!("{} malformed rows skipped:", result.stats.rows_skipped).yellow()
        );
        for skip in &result.stats.skipped {
            println!("  {}", skip.notice());
        }
    }
    display_summary(&result);

    Ok(())
}

/// Open a file and run the pipeline over it
///
/// The file handle is scoped to this call and closed on every exit path,
/// including parse failure.
pub fn process_file(path: &Path, config: &PipelineConfig) -> Result<PipelineResult> {
    let file =
        File::open(path).map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;
    process_reader(file, config)
}

/// Print the summarized product table
fn display_products(result: &PipelineResult) {
    if result.products.is_empty() {
        println!("{}", "No products to display".yellow());
        return;
    }

    println!(
        "{:<12} {:>10}   {}",
        "CODE".bold(),
        "QUANTITY".bold(),
        "LOCATION".bold()
    );
    for product in &result.products {
        println!(
            "{:<12} {:>10}   {}",
            product.code,
            product.quantity,
            product.location()
        );
    }
}

/// Print the pipeline statistics summary line
fn display_summary(result: &PipelineResult) {
    println!("{}", result.summary().cyan());
}

/// Set up tracing subscriber with env-filter support
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

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

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
