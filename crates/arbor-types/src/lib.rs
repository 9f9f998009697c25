//! Shared type definitions for the Arbor forest carbon dashboard.
//!
//! This crate is the single source of truth for the value types that flow
//! between the aggregation engine, the scene generator, and whichever layer
//! renders them. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for the chart and scene front end.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types (actions, periods, marker kinds, status tiers)
//! - [`structs`] -- Events, daily totals, aggregate buckets, chart datasets,
//!   and scene elements

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{MarkerKind, Period, PeriodParseError, StatusTier, TreeAction};
pub use structs::{
    CarbonStatus, ChartSeries, Cloud, DailyTotal, DailyTotalRecord, Event, ForestScene,
    MarkerPoint, PeriodBucket, PeriodKey, PeriodStats, Sprite,
};
