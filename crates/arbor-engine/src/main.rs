//! Report binary for the Arbor carbon dashboard.
//!
//! Reads a JSON array of daily planting/cutting totals, builds the
//! dashboard report for one period granularity, and prints it as JSON.
//!
//! # Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration from `arbor-config.yaml` (or `ARBOR_CONFIG`)
//! 3. Initialize structured logging (tracing)
//! 4. Read the daily totals
//! 5. Build the report and write it to stdout

mod args;
mod error;

use std::io::Write;
use std::path::Path;

use arbor_core::{ArborConfig, Dashboard};
use arbor_types::DailyTotalRecord;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::error::EngineError;

/// Application entry point for the report binary.
///
/// # Errors
///
/// Returns an error if the arguments, configuration, or input are invalid,
/// or the report cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Parse the command line. clap prints usage and exits on error.
    let args = Args::parse();

    // 2. Load configuration. Logging is not up yet; its level comes from here.
    let config = ArborConfig::load().map_err(EngineError::from)?;

    // 3. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        input = %args.input.display(),
        period = %args.period,
        history_limit = config.stats.history_limit,
        seed = ?config.scene.seed,
        "arbor-engine starting"
    );

    // 4. Read the daily totals.
    let records = read_records(&args.input)?;
    info!(records = records.len(), "Daily totals loaded");

    // 5. Build and print the report.
    let dashboard = Dashboard::new(&config).map_err(EngineError::from)?;
    let mut rng = config
        .scene
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let report = dashboard
        .report_from_records(&records, args.period, &mut rng)
        .map_err(EngineError::from)?;

    write_report(&report)?;
    Ok(())
}

/// Read and decode the input file.
fn read_records(path: &Path) -> Result<Vec<DailyTotalRecord>, EngineError> {
    let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_report(report: &arbor_core::DashboardReport) -> Result<(), EngineError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out).map_err(|source| EngineError::Io {
        path: "<stdout>".to_owned(),
        source,
    })
}
