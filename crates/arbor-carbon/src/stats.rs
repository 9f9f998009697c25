//! Headline statistics for the most recent period.

use arbor_types::{DailyTotal, Period, PeriodBucket, PeriodStats};

use crate::calculator::CarbonCalculator;

impl CarbonCalculator {
    /// Planted, cut, balance, and CO2 impact of the latest `period` bucket.
    ///
    /// With no data every figure is zero and the label is `None`.
    pub fn period_stats(&self, daily: &[DailyTotal], period: Period) -> PeriodStats {
        latest_stats(&self.aggregate(daily, period), period)
    }
}

/// Statistics for the last of `buckets`, which must be in chronological
/// order as produced by [`aggregate`](crate::aggregate::aggregate).
///
/// Lets a caller that already holds the buckets skip a second aggregation.
pub fn latest_stats(buckets: &[PeriodBucket], period: Period) -> PeriodStats {
    buckets.last().map_or(
        PeriodStats {
            period,
            period_label: None,
            planted: 0,
            cut: 0,
            balance: 0,
            co2_impact_tons: 0.0,
        },
        |bucket| PeriodStats {
            period,
            period_label: Some(bucket.period_label.clone()),
            planted: bucket.planted,
            cut: bucket.cut,
            balance: balance(bucket.planted, bucket.cut),
            co2_impact_tons: bucket.co2_impact_tons,
        },
    )
}

/// `planted - cut` as a signed count, saturating at the `i64` bounds.
fn balance(planted: u64, cut: u64) -> i64 {
    let planted = i64::try_from(planted).unwrap_or(i64::MAX);
    let cut = i64::try_from(cut).unwrap_or(i64::MAX);
    planted.saturating_sub(cut)
}
