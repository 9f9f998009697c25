//! Command-line interface.

use std::path::PathBuf;
use std::str::FromStr;

use arbor_types::Period;
use clap::Parser;

/// Build the Arbor dashboard report for a file of daily totals.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "arbor-engine", version)]
#[command(about = "Aggregate daily planting/cutting totals into a JSON dashboard report.")]
pub struct Args {
    /// JSON file holding an array of `{date, planted, cut}` records.
    pub input: PathBuf,

    /// Period to report at: day, week, month, or year.
    #[arg(default_value = "day", value_parser = Period::from_str)]
    pub period: Period,
}
