//! Temporal aggregation and carbon accounting for the Arbor dashboard.
//!
//! Turns a log of daily planting/cutting totals into per-period buckets and
//! estimates the net CO2 balance of each one. Everything here is a pure
//! function of its inputs: no I/O, no logging, no shared state.
//!
//! # Modules
//!
//! - [`calculator`] -- [`CarbonCalculator`]: the two injectable constants and
//!   the impact formulas built on them.
//! - [`period`] -- Grouping keys per period, including the January-1st
//!   anchored week number.
//! - [`aggregate`] -- Bucket construction, chronological ordering, and the
//!   most-recent-periods window.
//! - [`daily`] -- Collapsing raw events into [`DailyTotal`]s and parsing
//!   wire records.
//! - [`stats`] -- Headline statistics for the latest period.
//! - [`status`] -- Five-tier status classification and the CO2 meter.
//! - [`chart`] -- Chart datasets with display labels.
//! - [`error`] -- [`CarbonError`].
//!
//! # Impact formula
//!
//! ```text
//! tons = (planted * ABSORBED_PER_YEAR * year_fraction(period)
//!         - cut * RELEASED_PER_CUT) / 1000
//! ```
//!
//! Absorption is an annual rate prorated over the period; a cut tree
//! releases its carbon once, whatever the period length.
//!
//! # Usage
//!
//! ```
//! use arbor_carbon::CarbonCalculator;
//! use arbor_types::{DailyTotal, Period};
//! use chrono::NaiveDate;
//!
//! let calculator = CarbonCalculator::default();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let buckets = calculator.aggregate(&[DailyTotal::new(day, 100, 0)], Period::Year);
//!
//! assert_eq!(buckets.len(), 1);
//! assert!((calculator.total_impact(100, 0, Period::Year) - 2.18).abs() < 1e-9);
//! ```
//!
//! [`DailyTotal`]: arbor_types::DailyTotal

pub mod aggregate;
pub mod calculator;
pub mod chart;
pub mod daily;
pub mod error;
pub mod period;
pub mod stats;
pub mod status;

// Re-export primary types at crate root.
pub use aggregate::recent;
pub use calculator::{
    CarbonCalculator, DEFAULT_CO2_ABSORBED_PER_TREE_PER_YEAR_KG,
    DEFAULT_CO2_RELEASED_PER_CUT_TREE_KG, kg_to_tons,
};
pub use chart::{DAILY_CHART_WINDOW, chart_series, display_label};
pub use daily::{daily_totals, parse_records};
pub use error::CarbonError;
pub use period::{parse_period, period_key, week_of_year};
pub use stats::latest_stats;
pub use status::{meter_fill_percent, status_of, tier_of};
