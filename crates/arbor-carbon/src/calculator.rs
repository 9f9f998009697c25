//! Carbon impact formulas with injectable constants.
//!
//! [`CarbonCalculator`] owns the two constants the dashboard is built on:
//! how much CO2 a living tree absorbs per year, and how much a cut tree
//! releases at once. Every impact in the crate flows through it so a
//! deployment can tune both without touching the formulas.

use arbor_types::{DailyTotal, DailyTotalRecord, Period, PeriodBucket, TreeAction};

use crate::aggregate;
use crate::daily;
use crate::error::CarbonError;

/// Default CO2 absorbed by one tree over a year, in kilograms.
pub const DEFAULT_CO2_ABSORBED_PER_TREE_PER_YEAR_KG: f64 = 21.8;

/// Default CO2 released by cutting one tree, in kilograms.
pub const DEFAULT_CO2_RELEASED_PER_CUT_TREE_KG: f64 = 150.0;

/// Kilograms per metric ton.
const KG_PER_TON: f64 = 1000.0;

/// Carbon accounting over a pair of per-tree constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonCalculator {
    /// Kilograms absorbed per planted tree per year.
    absorbed_per_tree_per_year_kg: f64,
    /// Kilograms released per cut tree, once.
    released_per_cut_tree_kg: f64,
}

impl CarbonCalculator {
    /// Create a calculator from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`CarbonError::InvalidConstant`] if either constant is
    /// negative, infinite, or NaN.
    pub fn new(
        absorbed_per_tree_per_year_kg: f64,
        released_per_cut_tree_kg: f64,
    ) -> Result<Self, CarbonError> {
        validate_constant("co2_absorbed_per_tree_per_year_kg", absorbed_per_tree_per_year_kg)?;
        validate_constant("co2_released_per_cut_tree_kg", released_per_cut_tree_kg)?;
        Ok(Self {
            absorbed_per_tree_per_year_kg,
            released_per_cut_tree_kg,
        })
    }

    /// Kilograms absorbed per planted tree per year.
    pub const fn absorbed_per_tree_per_year_kg(&self) -> f64 {
        self.absorbed_per_tree_per_year_kg
    }

    /// Kilograms released per cut tree.
    pub const fn released_per_cut_tree_kg(&self) -> f64 {
        self.released_per_cut_tree_kg
    }

    /// CO2 absorbed by `count` planted trees over one `period`, in kilograms.
    pub fn planted_impact_kg(&self, count: u64, period: Period) -> f64 {
        count_as_f64(count) * self.absorbed_per_tree_per_year_kg * period.year_fraction()
    }

    /// CO2 released by cutting `count` trees, in kilograms. Never positive.
    pub fn cut_impact_kg(&self, count: u64) -> f64 {
        -(count_as_f64(count) * self.released_per_cut_tree_kg)
    }

    /// Net CO2 impact of one period's activity, in kilograms.
    pub fn total_impact_kg(&self, planted: u64, cut: u64, period: Period) -> f64 {
        self.planted_impact_kg(planted, period) + self.cut_impact_kg(cut)
    }

    /// Net CO2 impact of one period's activity, in tons.
    ///
    /// Single-bucket form of the aggregation formula, used for point-in-time
    /// estimates without running a full aggregation.
    pub fn total_impact(&self, planted: u64, cut: u64, period: Period) -> f64 {
        kg_to_tons(self.total_impact_kg(planted, cut, period))
    }

    /// Estimated impact of a single entry, in kilograms.
    ///
    /// Planting is reported as one year of absorption; cutting as the
    /// one-time release.
    pub fn entry_estimate_kg(&self, action: TreeAction, quantity: u32) -> f64 {
        match action {
            TreeAction::Planted => self.planted_impact_kg(u64::from(quantity), Period::Year),
            TreeAction::Cut => self.cut_impact_kg(u64::from(quantity)),
        }
    }

    /// Group daily totals into period buckets with their CO2 impact.
    ///
    /// See [`aggregate::aggregate`].
    pub fn aggregate(&self, daily: &[DailyTotal], period: Period) -> Vec<PeriodBucket> {
        aggregate::aggregate(self, daily, period)
    }

    /// Parse wire records and aggregate them.
    ///
    /// # Errors
    ///
    /// Returns [`CarbonError::MalformedDate`] for the first record whose
    /// date does not parse.
    pub fn aggregate_records(
        &self,
        records: &[DailyTotalRecord],
        period: Period,
    ) -> Result<Vec<PeriodBucket>, CarbonError> {
        let daily = daily::parse_records(records)?;
        Ok(self.aggregate(&daily, period))
    }
}

impl Default for CarbonCalculator {
    fn default() -> Self {
        Self {
            absorbed_per_tree_per_year_kg: DEFAULT_CO2_ABSORBED_PER_TREE_PER_YEAR_KG,
            released_per_cut_tree_kg: DEFAULT_CO2_RELEASED_PER_CUT_TREE_KG,
        }
    }
}

/// Convert kilograms to metric tons.
pub fn kg_to_tons(kg: f64) -> f64 {
    kg / KG_PER_TON
}

fn validate_constant(name: &'static str, value: f64) -> Result<(), CarbonError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CarbonError::InvalidConstant { name, value })
    }
}

/// Tree counts stay far below 2^53, where `f64` starts losing integers.
#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: u64) -> f64 {
    count as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn one_hundred_trees_for_a_year() {
        let calc = CarbonCalculator::default();
        assert!(approx(calc.total_impact(100, 0, Period::Year), 2.18));
    }

    #[test]
    fn planted_impact_is_prorated() {
        let calc = CarbonCalculator::default();
        assert!(approx(calc.planted_impact_kg(10, Period::Day), 10.0 * 21.8 / 365.0));
        assert!(approx(calc.planted_impact_kg(10, Period::Week), 10.0 * 21.8 / 52.0));
        assert!(approx(calc.planted_impact_kg(10, Period::Month), 10.0 * 21.8 / 12.0));
        assert!(approx(calc.planted_impact_kg(10, Period::Year), 218.0));
    }

    #[test]
    fn cut_impact_ignores_period() {
        let calc = CarbonCalculator::default();
        for period in Period::ALL {
            assert!(approx(calc.total_impact(0, 5, period), -0.75));
        }
    }

    #[test]
    fn sign_convention() {
        let calc = CarbonCalculator::default();
        for count in [0_u64, 1, 7, 1_000] {
            assert!(calc.total_impact(count, 0, Period::Year) >= 0.0);
            for period in Period::ALL {
                assert!(calc.total_impact(0, count, period) <= 0.0);
            }
        }
    }

    #[test]
    fn entry_estimates() {
        let calc = CarbonCalculator::default();
        assert!(approx(calc.entry_estimate_kg(TreeAction::Planted, 3), 65.4));
        assert!(approx(calc.entry_estimate_kg(TreeAction::Cut, 2), -300.0));
    }

    #[test]
    fn custom_constants_are_used() {
        let calc = CarbonCalculator::new(10.0, 100.0).unwrap();
        assert!(approx(calc.total_impact(100, 1, Period::Year), 0.9));
    }

    #[test]
    fn invalid_constants_are_rejected() {
        assert!(matches!(
            CarbonCalculator::new(-1.0, 150.0),
            Err(CarbonError::InvalidConstant {
                name: "co2_absorbed_per_tree_per_year_kg",
                ..
            })
        ));
        assert!(CarbonCalculator::new(21.8, f64::NAN).is_err());
        assert!(CarbonCalculator::new(f64::INFINITY, 150.0).is_err());
        assert!(CarbonCalculator::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn kg_to_tons_divides_by_thousand() {
        assert!(approx(kg_to_tons(1500.0), 1.5));
        assert!(approx(kg_to_tons(-750.0), -0.75));
    }
}
