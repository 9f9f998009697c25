//! Grouping daily totals into period buckets.
//!
//! Input order does not matter: totals are grouped by [`period_key`] and
//! the resulting buckets are sorted by their earliest member date, ties
//! broken by key. Every input total lands in exactly one bucket, so the
//! per-bucket sums always add up to the input sums.

use std::collections::BTreeMap;

use arbor_types::{DailyTotal, Period, PeriodBucket, PeriodKey};
use chrono::NaiveDate;

use crate::calculator::CarbonCalculator;
use crate::period::period_key;

/// Running sums for one bucket.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    first_date: NaiveDate,
    planted: u64,
    cut: u64,
}

impl Accumulator {
    const fn new(date: NaiveDate) -> Self {
        Self {
            first_date: date,
            planted: 0,
            cut: 0,
        }
    }

    fn absorb(&mut self, total: &DailyTotal) {
        self.first_date = self.first_date.min(total.date);
        self.planted = self.planted.saturating_add(total.planted);
        self.cut = self.cut.saturating_add(total.cut);
    }
}

/// Group `daily` into `period` buckets, oldest first, each with its CO2 impact.
///
/// Empty input yields no buckets.
pub fn aggregate(
    calculator: &CarbonCalculator,
    daily: &[DailyTotal],
    period: Period,
) -> Vec<PeriodBucket> {
    let mut groups: BTreeMap<PeriodKey, Accumulator> = BTreeMap::new();
    for total in daily {
        groups
            .entry(period_key(total.date, period))
            .or_insert_with(|| Accumulator::new(total.date))
            .absorb(total);
    }

    let mut buckets: Vec<PeriodBucket> = groups
        .into_iter()
        .map(|(key, acc)| PeriodBucket {
            key,
            period_label: key.to_string(),
            first_date: acc.first_date,
            planted: acc.planted,
            cut: acc.cut,
            co2_impact_tons: calculator.total_impact(acc.planted, acc.cut, period),
        })
        .collect();

    buckets.sort_by(|a, b| a.first_date.cmp(&b.first_date).then_with(|| a.key.cmp(&b.key)));
    buckets
}

/// The last `limit` buckets, still oldest first.
pub fn recent(buckets: &[PeriodBucket], limit: usize) -> &[PeriodBucket] {
    let start = buckets.len().saturating_sub(limit);
    buckets.get(start..).unwrap_or_default()
}
