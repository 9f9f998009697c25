//! Configuration loading and typed config structures for the Arbor dashboard.
//!
//! The canonical configuration lives in `arbor-config.yaml` at the project
//! root (or wherever `ARBOR_CONFIG` points). This module defines
//! strongly-typed structs that mirror the YAML structure, and provides a
//! loader that reads and validates the file. Every field has a default, so
//! an empty or missing file is a valid configuration.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use arbor_carbon::{
    CarbonCalculator, CarbonError, DEFAULT_CO2_ABSORBED_PER_TREE_PER_YEAR_KG,
    DEFAULT_CO2_RELEASED_PER_CUT_TREE_KG,
};
use arbor_scene::{DEFAULT_MAX_ATTEMPTS, LayoutRequest, SceneError, SceneSettings};
use serde::Deserialize;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "arbor-config.yaml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "ARBOR_CONFIG";

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "ARBOR_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The `carbon` section holds an unusable constant.
    #[error("invalid carbon config: {source}")]
    Carbon {
        /// The rejected constant.
        #[from]
        source: CarbonError,
    },

    /// The `scene` section describes a layout that cannot be placed.
    #[error("invalid scene config: {source}")]
    Scene {
        /// The rejected parameter.
        #[from]
        source: SceneError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level dashboard configuration.
///
/// Mirrors the structure of `arbor-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArborConfig {
    /// Carbon accounting constants.
    #[serde(default)]
    pub carbon: CarbonConfig,

    /// Statistics and history window.
    #[serde(default)]
    pub stats: StatsConfig,

    /// Forest scene layout.
    #[serde(default)]
    pub scene: SceneConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ArborConfig {
    /// Load configuration from the path in `ARBOR_CONFIG`, or from
    /// [`DEFAULT_CONFIG_PATH`] when the variable is unset.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// See [`ArborConfig::from_file`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        match Self::from_file(&path) {
            Err(ConfigError::Io { source }) if source.kind() == ErrorKind::NotFound => {
                let mut config = Self::default();
                config.logging.apply_env_overrides();
                Ok(config)
            }
            other => other,
        }
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// `ARBOR_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or a
    /// validation error from [`ArborConfig::validate`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or a
    /// validation error from [`ArborConfig::validate`].
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the carbon constants and the scene geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Carbon`] for a negative or non-finite
    /// constant and [`ConfigError::Scene`] for unusable scene dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.carbon.calculator()?;
        self.scene.layout_check().validate()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Carbon accounting constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarbonConfig {
    /// Kilograms of CO2 one planted tree absorbs per year.
    #[serde(default = "default_absorbed")]
    pub co2_absorbed_per_tree_per_year_kg: f64,

    /// Kilograms of CO2 released, once, when a tree is cut.
    #[serde(default = "default_released")]
    pub co2_released_per_cut_tree_kg: f64,
}

impl CarbonConfig {
    /// Build the calculator these constants describe.
    ///
    /// # Errors
    ///
    /// Returns [`CarbonError::InvalidConstant`] for a negative or
    /// non-finite constant.
    pub fn calculator(&self) -> Result<CarbonCalculator, CarbonError> {
        CarbonCalculator::new(
            self.co2_absorbed_per_tree_per_year_kg,
            self.co2_released_per_cut_tree_kg,
        )
    }
}

impl Default for CarbonConfig {
    fn default() -> Self {
        Self {
            co2_absorbed_per_tree_per_year_kg: default_absorbed(),
            co2_released_per_cut_tree_kg: default_released(),
        }
    }
}

/// Statistics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    /// Number of most recent periods included in a report.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

/// Forest scene configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneConfig {
    /// Markers in the scene, trees and stumps together.
    #[serde(default = "default_total_slots")]
    pub total_slots: usize,

    /// Desired minimum distance between markers, in pixels.
    #[serde(default = "default_min_separation")]
    pub min_separation: f64,

    /// Candidate draws per marker before separation is relaxed.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Scene width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Scene height in pixels.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Background clouds.
    #[serde(default = "default_cloud_count")]
    pub cloud_count: usize,

    /// Fixed RNG seed for reproducible scenes. Unset means a fresh layout
    /// on every report.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SceneConfig {
    /// Scene settings for the layout engine.
    pub const fn settings(&self) -> SceneSettings {
        SceneSettings {
            total_slots: self.total_slots,
            width: self.width,
            height: self.height,
            min_separation: self.min_separation,
            max_attempts: self.max_attempts,
            cloud_count: self.cloud_count,
        }
    }

    /// A layout request with these dimensions, used only for validation.
    /// The tree fraction varies per report and is always in range.
    const fn layout_check(&self) -> LayoutRequest {
        LayoutRequest {
            total_slots: self.total_slots,
            tree_fraction: 1.0,
            width: self.width,
            height: self.height,
            min_separation: self.min_separation,
            max_attempts: self.max_attempts,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            total_slots: default_total_slots(),
            min_separation: default_min_separation(),
            max_attempts: default_max_attempts(),
            width: default_width(),
            height: default_height(),
            cloud_count: default_cloud_count(),
            seed: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter
    /// directive. `RUST_LOG` takes precedence at startup.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `ARBOR_LOG_LEVEL` when it is set and
    /// non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.override_level(&val);
        }
    }

    fn override_level(&mut self, level: &str) {
        let level = level.trim();
        if !level.is_empty() {
            self.level = level.to_owned();
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_absorbed() -> f64 {
    DEFAULT_CO2_ABSORBED_PER_TREE_PER_YEAR_KG
}

const fn default_released() -> f64 {
    DEFAULT_CO2_RELEASED_PER_CUT_TREE_KG
}

const fn default_history_limit() -> usize {
    30
}

const fn default_total_slots() -> usize {
    60
}

const fn default_min_separation() -> f64 {
    40.0
}

const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

const fn default_width() -> f64 {
    1000.0
}

const fn default_height() -> f64 {
    500.0
}

const fn default_cloud_count() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_owned()
}
