//! Error types for the report binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode between loading configuration and printing the report.

/// Top-level error for the report binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: arbor_core::ConfigError,
    },

    /// Building the report failed.
    #[error("dashboard error: {source}")]
    Dashboard {
        /// The underlying dashboard error.
        #[from]
        source: arbor_core::DashboardError,
    },

    /// Reading the input file or writing the report failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File the operation was on.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input is not a JSON array of daily totals, or the report could
    /// not be serialized.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
