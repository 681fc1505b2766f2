use clap::Parser;
use inventory_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Inventory Processor - Warehouse Stock Summarizer");
    println!("================================================");
    println!();
    println!("Clean, validate and summarize warehouse inventory CSV files into an");
    println!("ordered per-location stock summary.");
    println!();
    println!("USAGE:");
    println!("    inventory-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Summarize an inventory file and write the output CSV");
    println!("    validate    Check an inventory file without writing output");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize an inventory file:");
    println!("    inventory-processor process inventory.csv");
    println!();
    println!("    # Custom output path, headerless input:");
    println!("    inventory-processor process inventory.csv -o summary.csv --no-header");
    println!();
    println!("    # Report malformed rows without writing anything:");
    println!("    inventory-processor validate inventory.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    inventory-processor <COMMAND> --help");
}
