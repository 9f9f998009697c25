//! Error types for the `arbor-carbon` crate.

use arbor_types::PeriodParseError;

/// Errors that can occur while aggregating events or computing impacts.
#[derive(Debug, thiserror::Error)]
pub enum CarbonError {
    /// The period selector is not one of `day`, `week`, `month`, `year`.
    #[error("invalid period: {value:?}")]
    InvalidPeriod {
        /// The rejected period string.
        value: String,
    },

    /// A record carried a date that is not a valid `YYYY-MM-DD` calendar date.
    #[error("malformed date {value:?} in record {index}: {source}")]
    MalformedDate {
        /// Position of the offending record in the input.
        index: usize,
        /// The rejected date string.
        value: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },

    /// A carbon constant is negative, infinite, or NaN.
    #[error("invalid carbon constant {name}: {value}")]
    InvalidConstant {
        /// Name of the constant.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl From<PeriodParseError> for CarbonError {
    fn from(err: PeriodParseError) -> Self {
        Self::InvalidPeriod { value: err.value }
    }
}
