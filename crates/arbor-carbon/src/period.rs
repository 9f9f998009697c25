//! Grouping keys for each aggregation period.
//!
//! Day, month, and year keys are plain calendar fields. Week keys are
//! **not** ISO-8601 weeks: week 1 is the (possibly partial) Sunday-to-Saturday
//! week that contains January 1st, and every year restarts at week 1.
//!
//! ```text
//! week = ceil((day_of_year + weekday_of_jan_1) / 7)
//! ```
//!
//! where `day_of_year` is 1-based and `weekday_of_jan_1` counts days from
//! Sunday (Sunday = 0). Existing aggregated output depends on this
//! numbering, so it must not be swapped for ISO weeks.

use arbor_types::{Period, PeriodKey};
use chrono::{Datelike, NaiveDate};

use crate::error::CarbonError;

/// Days in a week.
const DAYS_PER_WEEK: u32 = 7;

/// Parse a period selector such as `"week"`.
///
/// # Errors
///
/// Returns [`CarbonError::InvalidPeriod`] for anything other than `day`,
/// `week`, `month`, or `year`.
pub fn parse_period(value: &str) -> Result<Period, CarbonError> {
    Ok(value.parse::<Period>()?)
}

/// Week of the year for `date`, anchored to January 1st.
///
/// Ranges from 1 to 54 (54 only in a leap year starting on a Saturday).
#[allow(clippy::arithmetic_side_effects)] // ordinal <= 366 and weekday < 7; no overflow.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal = date.ordinal();
    let days_before = ordinal - 1;
    let weekday = date.weekday().num_days_from_sunday();
    // Walk back `days_before` days from today's weekday to land on Jan 1st.
    let jan_first_weekday =
        (weekday + DAYS_PER_WEEK - days_before % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    (ordinal + jan_first_weekday).div_ceil(DAYS_PER_WEEK)
}

/// The bucket key `date` falls into at `period` granularity.
pub fn period_key(date: NaiveDate, period: Period) -> PeriodKey {
    match period {
        Period::Day => PeriodKey::Day { date },
        Period::Week => PeriodKey::Week {
            year: date.year(),
            week: week_of_year(date),
        },
        Period::Month => PeriodKey::Month {
            year: date.year(),
            month: date.month(),
        },
        Period::Year => PeriodKey::Year { year: date.year() },
    }
}
