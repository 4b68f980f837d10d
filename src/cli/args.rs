use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Settle shared expenses into a minimal transfer plan
#[derive(Parser, Debug)]
#[command(name = "godutch-engine")]
#[command(about = "Settle shared expenses into a minimal transfer plan", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing expense records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Meeting roster
    ///
    /// When omitted, the roster is derived from the expense records in
    /// first-seen order (payer first, then applied members).
    #[arg(
        long = "members",
        value_name = "NAMES",
        value_delimiter = ',',
        help = "Comma-separated member roster; derived from the input when omitted"
    )]
    pub members: Option<Vec<String>>,

    /// Which report to write to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "transfers",
        help = "Report to produce: 'balances', 'transfers' or 'summary'"
    )]
    pub report: ReportKind,

    /// Meeting label used in diagnostics
    #[arg(
        long = "name",
        value_name = "NAME",
        default_value = "meeting",
        help = "Meeting label"
    )]
    pub name: String,
}

/// Available report kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Per-member paid/owed/balance table
    Balances,
    /// Resolved transfer plan
    Transfers,
    /// Totals and the consistency flag
    Summary,
}
