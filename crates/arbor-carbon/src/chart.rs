//! Chart datasets for the activity chart.

use arbor_types::{ChartSeries, Period, PeriodBucket, PeriodKey};
use chrono::Datelike;

use crate::aggregate::recent;

/// Most daily buckets the chart shows at once.
pub const DAILY_CHART_WINDOW: usize = 30;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Build parallel chart datasets from `buckets`.
///
/// The day view is limited to the last [`DAILY_CHART_WINDOW`] buckets.
pub fn chart_series(buckets: &[PeriodBucket], period: Period) -> ChartSeries {
    let shown = match period {
        Period::Day => recent(buckets, DAILY_CHART_WINDOW),
        Period::Week | Period::Month | Period::Year => buckets,
    };

    let mut series = ChartSeries {
        labels: Vec::with_capacity(shown.len()),
        planted: Vec::with_capacity(shown.len()),
        cut: Vec::with_capacity(shown.len()),
        co2_tons: Vec::with_capacity(shown.len()),
    };
    for bucket in shown {
        series.labels.push(display_label(&bucket.key));
        series.planted.push(bucket.planted);
        series.cut.push(bucket.cut);
        series.co2_tons.push(bucket.co2_impact_tons);
    }
    series
}

/// Axis label for a bucket key: `31/1`, `Week 5`, `January 2024`, `2024`.
pub fn display_label(key: &PeriodKey) -> String {
    match *key {
        PeriodKey::Day { date } => format!("{}/{}", date.day(), date.month()),
        PeriodKey::Week { week, .. } => format!("Week {week}"),
        PeriodKey::Month { year, month } => {
            let name = usize::try_from(month.saturating_sub(1))
                .ok()
                .and_then(|i| MONTH_NAMES.get(i))
                .copied()
                .unwrap_or("Unknown");
            format!("{name} {year}")
        }
        PeriodKey::Year { year } => year.to_string(),
    }
}
