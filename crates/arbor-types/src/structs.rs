//! Core value structs for the Arbor dashboard.
//!
//! Raw events and their per-day rollups are the input side; period buckets,
//! period statistics, carbon status, and scene markers are the output side.
//! All of them are immutable value objects owned by the caller.

use core::fmt;
use core::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{MarkerKind, Period, StatusTier, TreeAction};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// One recorded planting or cutting action.
///
/// A zero quantity cannot be represented, so deserializing one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Calendar date the action took place.
    pub date: NaiveDate,
    /// Whether trees were planted or cut.
    pub action: TreeAction,
    /// Number of trees affected.
    pub quantity: NonZeroU32,
}

impl Event {
    /// Create an event, or `None` when `quantity` is zero.
    pub fn new(date: NaiveDate, action: TreeAction, quantity: u32) -> Option<Self> {
        NonZeroU32::new(quantity).map(|quantity| Self {
            date,
            action,
            quantity,
        })
    }
}

// ---------------------------------------------------------------------------
// Daily totals
// ---------------------------------------------------------------------------

/// One date's summed activity, the unit the aggregation engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailyTotal {
    /// The calendar date.
    pub date: NaiveDate,
    /// Trees planted on this date.
    pub planted: u64,
    /// Trees cut on this date.
    pub cut: u64,
}

impl DailyTotal {
    /// Create a daily total.
    pub const fn new(date: NaiveDate, planted: u64, cut: u64) -> Self {
        Self { date, planted, cut }
    }
}

/// Wire form of a [`DailyTotal`] as delivered by the API layer.
///
/// The date is an unparsed ISO-8601 string; missing counts default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailyTotalRecord {
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Trees planted on this date.
    #[serde(default)]
    pub planted: u64,
    /// Trees cut on this date.
    #[serde(default)]
    pub cut: u64,
}

// ---------------------------------------------------------------------------
// Period buckets
// ---------------------------------------------------------------------------

/// Grouping key identifying one aggregation bucket.
///
/// Keys of the same period order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "period", rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum PeriodKey {
    /// A single calendar day.
    Day {
        /// The day.
        date: NaiveDate,
    },
    /// A week of the year, counted from the week containing January 1st.
    Week {
        /// Calendar year the week belongs to.
        year: i32,
        /// Week number, starting at 1.
        week: u32,
    },
    /// A calendar month.
    Month {
        /// Calendar year.
        year: i32,
        /// Month number, 1 through 12.
        month: u32,
    },
    /// A calendar year.
    Year {
        /// Calendar year.
        year: i32,
    },
}

impl PeriodKey {
    /// The period granularity this key belongs to.
    pub const fn period(&self) -> Period {
        match self {
            Self::Day { .. } => Period::Day,
            Self::Week { .. } => Period::Week,
            Self::Month { .. } => Period::Month,
            Self::Year { .. } => Period::Year,
        }
    }
}

/// Canonical period label: `2024-01-31`, `2024-W05`, `2024-01`, or `2024`.
impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day { date } => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Week { year, week } => write!(f, "{year}-W{week:02}"),
            Self::Month { year, month } => write!(f, "{year}-{month:02}"),
            Self::Year { year } => write!(f, "{year}"),
        }
    }
}

/// One aggregation result: the summed activity of one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PeriodBucket {
    /// Grouping key of this bucket.
    pub key: PeriodKey,
    /// Canonical label of [`Self::key`].
    pub period_label: String,
    /// Earliest member date in the bucket.
    pub first_date: NaiveDate,
    /// Trees planted within the period.
    pub planted: u64,
    /// Trees cut within the period.
    pub cut: u64,
    /// Net CO2 balance in tons; positive means absorption exceeds release.
    pub co2_impact_tons: f64,
}

/// Headline statistics for the most recent period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PeriodStats {
    /// Period granularity the statistics were computed at.
    pub period: Period,
    /// Label of the most recent bucket, or `None` when there is no data.
    pub period_label: Option<String>,
    /// Trees planted in the period.
    pub planted: u64,
    /// Trees cut in the period.
    pub cut: u64,
    /// Planted minus cut.
    pub balance: i64,
    /// Net CO2 balance in tons.
    pub co2_impact_tons: f64,
}

/// Classification of an impact on the five-tier status scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CarbonStatus {
    /// The tier the impact falls in.
    pub tier: StatusTier,
    /// Message-template key for the tier.
    pub message_key: String,
    /// Display color for the tier.
    pub color: String,
    /// The classified impact in tons.
    pub impact_tons: f64,
}

// ---------------------------------------------------------------------------
// Scene markers
// ---------------------------------------------------------------------------

/// A placed visual element in the forest scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MarkerPoint {
    /// Horizontal coordinate within the scene rectangle.
    pub x: f64,
    /// Vertical coordinate within the scene rectangle.
    pub y: f64,
    /// Whether the marker is drawn as a tree or a stump.
    pub kind: MarkerKind,
}

/// A marker prepared for drawing: its sprite box anchored at the marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Sprite {
    /// The placed marker.
    pub marker: MarkerPoint,
    /// Left edge of the sprite box.
    pub left: f64,
    /// Top edge of the sprite box.
    pub top: f64,
    /// Uniform scale applied to the sprite for visual variety.
    pub scale: f64,
}

/// A decorative cloud drifting across the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Cloud {
    /// Cloud width in pixels.
    pub width_px: f64,
    /// Cloud height in pixels, half the width.
    pub height_px: f64,
    /// Initial horizontal position as a percentage of the scene width.
    pub left_pct: f64,
    /// Initial vertical position as a percentage of the scene height.
    pub top_pct: f64,
    /// Seconds for one horizontal drift across the scene.
    pub drift_secs: f64,
    /// Seconds for one vertical bob.
    pub bob_secs: f64,
}

/// Everything the renderer needs to draw the forest scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ForestScene {
    /// Scene width the markers were placed in.
    pub width: f64,
    /// Scene height the markers were placed in.
    pub height: f64,
    /// Trees first, then stumps.
    pub sprites: Vec<Sprite>,
    /// Background clouds.
    pub clouds: Vec<Cloud>,
}

// ---------------------------------------------------------------------------
// Chart datasets
// ---------------------------------------------------------------------------

/// Parallel datasets for the bar-and-line activity chart.
///
/// All four vectors have the same length; index `i` describes one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChartSeries {
    /// Human-readable axis labels.
    pub labels: Vec<String>,
    /// Planted bars.
    pub planted: Vec<u64>,
    /// Cut bars.
    pub cut: Vec<u64>,
    /// CO2 impact line, in tons.
    pub co2_tons: Vec<f64>,
}
