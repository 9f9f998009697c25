//! The dashboard facade: one call from daily totals to a full report.
//!
//! A report bundles everything the rendering layer draws for one period
//! granularity: the recent buckets, headline statistics for the latest
//! bucket, its status tier and meter position, chart datasets, and a freshly
//! laid out forest scene.

use arbor_carbon::{
    CarbonCalculator, CarbonError, chart_series, latest_stats, meter_fill_percent, parse_records,
    recent, status_of,
};
use arbor_scene::{SceneError, SceneSettings, compose_scene};
use arbor_types::{
    CarbonStatus, ChartSeries, DailyTotal, DailyTotalRecord, ForestScene, Period, PeriodBucket,
    PeriodStats, StatusTier,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ArborConfig, ConfigError};

/// Errors raised while building a report.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The input records could not be turned into daily totals.
    #[error("carbon aggregation failed: {source}")]
    Carbon {
        /// The underlying aggregation error.
        #[from]
        source: CarbonError,
    },

    /// The forest scene could not be laid out.
    #[error("scene layout failed: {source}")]
    Scene {
        /// The underlying layout error.
        #[from]
        source: SceneError,
    },
}

/// Everything the dashboard shows for one period granularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Granularity the report was built at.
    pub period: Period,
    /// The most recent buckets, oldest first.
    pub buckets: Vec<PeriodBucket>,
    /// Statistics for the latest bucket.
    pub stats: PeriodStats,
    /// Status of the latest bucket's impact.
    pub status: CarbonStatus,
    /// English rendering of the status.
    pub status_text: String,
    /// Position of the latest impact on the CO2 meter, 0 to 100.
    pub meter_fill_percent: f64,
    /// Chart datasets.
    pub chart: ChartSeries,
    /// Forest scene for the lifetime planted/cut totals.
    pub scene: ForestScene,
}

/// Composes the carbon and scene engines with configured parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    calculator: CarbonCalculator,
    scene: SceneSettings,
    history_limit: usize,
}

impl Dashboard {
    /// Build a dashboard from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration does not validate.
    pub fn new(config: &ArborConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            calculator: config.carbon.calculator()?,
            scene: config.scene.settings(),
            history_limit: config.stats.history_limit,
        })
    }

    /// Build a dashboard from already constructed parts.
    pub const fn from_parts(
        calculator: CarbonCalculator,
        scene: SceneSettings,
        history_limit: usize,
    ) -> Self {
        Self {
            calculator,
            scene,
            history_limit,
        }
    }

    /// The calculator reports are computed with.
    pub const fn calculator(&self) -> &CarbonCalculator {
        &self.calculator
    }

    /// Build the report for `daily` at `period`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Scene`] if the scene settings cannot be
    /// laid out.
    pub fn report(
        &self,
        daily: &[DailyTotal],
        period: Period,
        rng: &mut impl Rng,
    ) -> Result<DashboardReport, DashboardError> {
        let all = self.calculator.aggregate(daily, period);
        let buckets = recent(&all, self.history_limit).to_vec();
        debug!(
            %period,
            days = daily.len(),
            buckets = all.len(),
            shown = buckets.len(),
            "Aggregated daily totals"
        );

        let stats = latest_stats(&all, period);
        let status = status_of(stats.co2_impact_tons);
        let status_text = status.tier.render(stats.co2_impact_tons);
        let chart = chart_series(&buckets, period);

        let (planted, cut) = lifetime_totals(daily);
        let scene = compose_scene(planted, cut, &self.scene, rng)?;

        log_status(&stats, status.tier);
        debug!(
            planted,
            cut,
            sprites = scene.sprites.len(),
            clouds = scene.clouds.len(),
            "Scene composed"
        );

        Ok(DashboardReport {
            period,
            buckets,
            meter_fill_percent: meter_fill_percent(stats.co2_impact_tons),
            stats,
            status,
            status_text,
            chart,
            scene,
        })
    }

    /// Parse wire records and build the report.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Carbon`] for a record with a malformed
    /// date, or any error from [`Dashboard::report`].
    pub fn report_from_records(
        &self,
        records: &[DailyTotalRecord],
        period: Period,
        rng: &mut impl Rng,
    ) -> Result<DashboardReport, DashboardError> {
        let daily = parse_records(records)?;
        self.report(&daily, period, rng)
    }
}

/// Planted and cut summed over every day.
fn lifetime_totals(daily: &[DailyTotal]) -> (u64, u64) {
    daily.iter().fold((0_u64, 0_u64), |(planted, cut), day| {
        (planted.saturating_add(day.planted), cut.saturating_add(day.cut))
    })
}

fn log_status(stats: &PeriodStats, tier: StatusTier) {
    info!(
        period = %stats.period,
        label = stats.period_label.as_deref().unwrap_or("-"),
        planted = stats.planted,
        cut = stats.cut,
        impact_tons = stats.co2_impact_tons,
        tier = ?tier,
        "Report built"
    );
}
