//! Status classification and the CO2 meter.
//!
//! The real line is split into five intervals at `-5`, `0`, and `+5` tons;
//! exactly zero is a tier of its own.

use arbor_types::{CarbonStatus, StatusTier};

/// Boundary between the outer and inner tiers, in tons.
const TIER_BOUNDARY_TONS: f64 = 5.0;

/// Half-width of the CO2 meter scale: it runs from `-10` to `+10` tons.
const METER_RANGE_TONS: f64 = 10.0;

/// Meter position for a neutral (or unknown) impact.
const METER_NEUTRAL_PERCENT: f64 = 50.0;

/// The tier an impact in tons falls into.
///
/// NaN is treated as neutral.
pub fn tier_of(impact_tons: f64) -> StatusTier {
    if impact_tons > TIER_BOUNDARY_TONS {
        StatusTier::Excellent
    } else if impact_tons > 0.0 {
        StatusTier::Positive
    } else if impact_tons <= -TIER_BOUNDARY_TONS {
        StatusTier::Critical
    } else if impact_tons < 0.0 {
        StatusTier::Negative
    } else {
        StatusTier::Neutral
    }
}

/// Classify an impact into its tier, message key, and display color.
pub fn status_of(impact_tons: f64) -> CarbonStatus {
    let tier = tier_of(impact_tons);
    CarbonStatus {
        tier,
        message_key: tier.message_key().to_owned(),
        color: tier.color().to_owned(),
        impact_tons,
    }
}

/// Fill level of the CO2 meter, in percent.
///
/// `-10` tons or less is empty, `+10` or more is full, zero is half.
pub fn meter_fill_percent(impact_tons: f64) -> f64 {
    if impact_tons.is_nan() {
        return METER_NEUTRAL_PERCENT;
    }
    let share = (impact_tons + METER_RANGE_TONS) / (METER_RANGE_TONS * 2.0);
    (share * 100.0).clamp(0.0, 100.0)
}
