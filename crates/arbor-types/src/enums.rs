//! Enumeration types for the Arbor dashboard.
//!
//! Recorded actions, aggregation periods, scene marker kinds, and the
//! five-tier carbon status scale.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Tree actions
// ---------------------------------------------------------------------------

/// What happened to the trees in a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum TreeAction {
    /// Trees were planted; they absorb CO2 over time.
    Planted,
    /// Trees were cut down; their stored carbon is released at once.
    Cut,
}

impl TreeAction {
    /// The lowercase wire token for this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planted => "planted",
            Self::Cut => "cut",
        }
    }
}

impl fmt::Display for TreeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Periods
// ---------------------------------------------------------------------------

/// Granularity of temporal aggregation.
///
/// Ordered from finest to coarsest so that `Period::Day < Period::Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Period {
    /// One bucket per calendar day.
    Day,
    /// One bucket per January-1st-anchored week of the year.
    Week,
    /// One bucket per calendar month.
    Month,
    /// One bucket per calendar year.
    Year,
}

impl Period {
    /// Every period, finest first.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Fraction of a year that one bucket of this period represents.
    ///
    /// Used to prorate the annual absorption rate of planted trees.
    pub const fn year_fraction(self) -> f64 {
        match self {
            Self::Day => 1.0 / 365.0,
            Self::Week => 1.0 / 52.0,
            Self::Month => 1.0 / 12.0,
            Self::Year => 1.0,
        }
    }

    /// The lowercase wire token for this period.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A period string that is not one of `day`, `week`, `month`, `year`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized period {value:?} (expected day, week, month, or year)")]
pub struct PeriodParseError {
    /// The rejected input, as given.
    pub value: String,
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(PeriodParseError {
                value: s.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Scene markers
// ---------------------------------------------------------------------------

/// Visual kind of a placed scene marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MarkerKind {
    /// A standing tree.
    Tree,
    /// A stump left by a cut tree.
    Stump,
}

// ---------------------------------------------------------------------------
// Carbon status
// ---------------------------------------------------------------------------

/// Five-tier classification of a net CO2 impact, worst first.
///
/// | Tier      | Impact (tons)  |
/// |-----------|----------------|
/// | Critical  | `(-inf, -5]`   |
/// | Negative  | `(-5, 0)`      |
/// | Neutral   | exactly `0`    |
/// | Positive  | `(0, 5]`       |
/// | Excellent | `(5, +inf)`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum StatusTier {
    /// Releasing at least five tons.
    Critical,
    /// Releasing less than five tons.
    Negative,
    /// Exactly balanced.
    Neutral,
    /// Absorbing up to five tons.
    Positive,
    /// Absorbing more than five tons.
    Excellent,
}

impl StatusTier {
    /// Message-template key a front end uses to look up localized text.
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Critical => "carbon.status.critical",
            Self::Negative => "carbon.status.negative",
            Self::Neutral => "carbon.status.neutral",
            Self::Positive => "carbon.status.positive",
            Self::Excellent => "carbon.status.excellent",
        }
    }

    /// English status sentence for an impact classified in this tier.
    pub fn render(self, impact_tons: f64) -> String {
        let magnitude = impact_tons.abs();
        match self {
            Self::Critical => format!("Critical: releasing {magnitude:.2} tons of CO\u{2082}"),
            Self::Negative => format!("Negative: releasing {magnitude:.2} tons of CO\u{2082}"),
            Self::Neutral => String::from("Neutral: zero carbon impact"),
            Self::Positive => format!("Positive: absorbing {magnitude:.2} tons of CO\u{2082}"),
            Self::Excellent => format!("Excellent: absorbing {magnitude:.2} tons of CO\u{2082}"),
        }
    }

    /// Display color of the tier as a CSS hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "#c62828",
            Self::Negative => "#f57c00",
            Self::Neutral => "#ffb300",
            Self::Positive => "#4caf50",
            Self::Excellent => "#2e7d32",
        }
    }
}
