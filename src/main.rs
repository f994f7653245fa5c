use clap::Parser;
use finsheet_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime
        .block_on(commands::run(args))
        .map_err(anyhow::Error::from);

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the error chain to stderr and exit
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Financial Sheet Processor");
    println!("=========================");
    println!();
    println!("Validate financial spreadsheet submissions against a declarative schema");
    println!("and extract time-series attributes into normalized database records.");
    println!();
    println!("USAGE:");
    println!("    finsheet-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate a spreadsheet against a schema and report findings");
    println!("    process     Validate, extract and persist records from a spreadsheet");
    println!("    serve       Serve the processing pipeline over HTTP");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate a spreadsheet and print the findings:");
    println!("    finsheet-processor validate --sheet accounts.xlsx --schema schema.yaml");
    println!();
    println!("    # Run the full pipeline and insert records:");
    println!("    finsheet-processor process --sheet accounts.xlsx --schema schema.yaml \\");
    println!("                               --config storage.yaml --customer-id 3 --application-id 7");
    println!();
    println!("    # Preview extraction without touching the database:");
    println!("    finsheet-processor process --sheet accounts.xlsx --schema schema.yaml \\");
    println!("                               --customer-id 3 --application-id 7 --dry-run --format json");
    println!();
    println!("    # Serve the pipeline over HTTP:");
    println!("    finsheet-processor serve --schema schema.yaml --config storage.yaml --bind 0.0.0.0:8000");
    println!();
    println!("For detailed help on any command, use:");
    println!("    finsheet-processor <COMMAND> --help");
}
