//! Go-Dutch Settlement Engine CLI
//!
//! Command-line interface for settling shared expenses from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- expenses.csv > transfers.csv
//! cargo run -- --report balances expenses.csv > balances.csv
//! cargo run -- --members Ann,Ben,Cho --report summary expenses.csv
//! ```
//!
//! The program reads expense records from the input CSV file, settles them
//! through the go-dutch engine, and writes the requested report to stdout.
//! Malformed rows and rejected expenses are reported on stderr and skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, invalid roster, etc.)

use godutch_engine::cli;
use godutch_engine::pipeline;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Settle the expenses and write the report to stdout
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process(
        &args.input_file,
        args.members,
        &args.name,
        args.report,
        &mut output,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
