//! Home-office deduction method selection.
//!
//! Computes the two claim estimates side by side and recommends the
//! larger:
//!
//! - **Fixed-rate method** — a fixed cents-per-hour rate across the
//!   year's office hours. Gated on minimum weekly hours and a
//!   dedicated office space; ineligible claimants get exactly zero
//!   from this method, not a flagged estimate.
//! - **Actual-cost method** — running and occupancy expenses
//!   apportioned by the office's share of the home's floor area, plus
//!   straight-line depreciation on furniture and equipment. Computed
//!   for every claimant, eligible or not, for information.
//!
//! Depreciation is a capital allowance on the asset itself, so it is
//! never apportioned by floor area.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use benefit_core::calculations::{DeductionConfig, DeductionWorksheet};
//! use benefit_core::{DeductionInputs, DeductionMethod, EmploymentType, ExpenseProfile};
//!
//! let config = DeductionConfig {
//!     fixed_rate_per_hour: dec!(0.67),
//!     min_hours_per_week: dec!(10),
//!     default_weeks_per_year: dec!(52),
//!     furniture_depreciation_rate: dec!(0.125),
//!     equipment_depreciation_rate: dec!(0.20),
//!     office_share_scrutiny_threshold: dec!(0.50),
//! };
//!
//! let inputs = DeductionInputs {
//!     home_area_sqm: dec!(150),
//!     office_area_sqm: dec!(15),
//!     hours_per_week: dec!(40),
//!     weeks_per_year: Some(dec!(52)),
//!     expenses: ExpenseProfile {
//!         utilities: dec!(3000),
//!         cleaning: dec!(1500),
//!         internet_phone: dec!(1500),
//!         rent_or_mortgage_interest: dec!(0),
//!         insurance: dec!(0),
//!         council_rates: dec!(0),
//!         furniture_value: dec!(0),
//!         equipment_value: dec!(0),
//!     },
//!     employment: EmploymentType::SoleTrader,
//! };
//!
//! let worksheet = DeductionWorksheet::new(config);
//! let result = worksheet.calculate(&inputs).unwrap();
//!
//! assert_eq!(result.fixed_rate_total, dec!(1393.60));
//! assert_eq!(result.actual_cost_total, dec!(600.00));
//! assert_eq!(result.recommended_method, DeductionMethod::FixedRate);
//! assert_eq!(result.savings, dec!(793.60));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{
    DeductionInputs, DeductionMethod, DeductionResult, EligibilityAssessment,
    EligibilityWarning, EmploymentType, ExpenseBreakdown, ExpenseProfile, TaxYearConfig,
};

/// Errors that can occur during deduction method selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionError {
    /// The fixed hourly rate must be positive.
    #[error("fixed rate per hour must be positive, got {0}")]
    InvalidFixedRate(Decimal),

    /// The minimum weekly hours threshold must be non-negative.
    #[error("minimum hours per week must be non-negative, got {0}")]
    InvalidMinHours(Decimal),

    /// Each depreciation rate must be between 0 and 1.
    #[error("depreciation rate must be between 0 and 1, got {0}")]
    InvalidDepreciationRate(Decimal),

    /// The office-share scrutiny threshold must be between 0 and 1.
    #[error("office share scrutiny threshold must be between 0 and 1, got {0}")]
    InvalidScrutinyThreshold(Decimal),

    /// Weeks per year must be between 1 and 53.
    #[error("weeks per year must be between 1 and 53, got {0}")]
    InvalidWeeksPerYear(Decimal),

    /// The home floor area must be positive.
    #[error("home area must be positive, got {0} sqm")]
    HomeAreaNotPositive(Decimal),

    /// The office floor area must be non-negative.
    #[error("office area cannot be negative, got {0} sqm")]
    NegativeOfficeArea(Decimal),

    /// Weekly hours must be non-negative.
    #[error("hours per week cannot be negative, got {0}")]
    NegativeHours(Decimal),

    /// The office cannot be larger than the home it sits in. This is
    /// a data-quality failure, never silently clamped.
    #[error("office area {office} sqm exceeds home area {home} sqm")]
    OfficeExceedsHome { office: Decimal, home: Decimal },
}

/// Configuration for the deduction worksheet, versioned per tax year.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use benefit_core::calculations::DeductionConfig;
///
/// // FY 2024-25 configuration
/// let config = DeductionConfig {
///     fixed_rate_per_hour: dec!(0.67),
///     min_hours_per_week: dec!(10),
///     default_weeks_per_year: dec!(52),
///     furniture_depreciation_rate: dec!(0.125),
///     equipment_depreciation_rate: dec!(0.20),
///     office_share_scrutiny_threshold: dec!(0.50),
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionConfig {
    /// Fixed-rate method rate in dollars per office hour.
    pub fixed_rate_per_hour: Decimal,

    /// Minimum weekly office hours for fixed-rate eligibility.
    pub min_hours_per_week: Decimal,

    /// Working weeks per year assumed when the inputs omit one.
    pub default_weeks_per_year: Decimal,

    /// Straight-line rate for office furniture (typically 1/8).
    pub furniture_depreciation_rate: Decimal,

    /// Straight-line rate for office equipment (typically 1/5).
    pub equipment_depreciation_rate: Decimal,

    /// Office share of the home above which a claim is flagged as
    /// likely to draw additional scrutiny.
    pub office_share_scrutiny_threshold: Decimal,
}

impl DeductionConfig {
    /// Creates a worksheet configuration from a [`TaxYearConfig`].
    pub fn from_tax_year_config(config: &TaxYearConfig) -> Self {
        Self {
            fixed_rate_per_hour: config.fixed_rate_per_hour,
            min_hours_per_week: config.min_hours_per_week,
            default_weeks_per_year: config.default_weeks_per_year,
            furniture_depreciation_rate: config.furniture_depreciation_rate,
            equipment_depreciation_rate: config.equipment_depreciation_rate,
            office_share_scrutiny_threshold: config.office_share_scrutiny_threshold,
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionError`] if:
    /// - `fixed_rate_per_hour` is not positive
    /// - `min_hours_per_week` is negative
    /// - either depreciation rate is not in (0, 1]
    /// - `office_share_scrutiny_threshold` is not in (0, 1]
    /// - `default_weeks_per_year` is not in [1, 53]
    pub fn validate(&self) -> Result<(), DeductionError> {
        if self.fixed_rate_per_hour <= Decimal::ZERO {
            return Err(DeductionError::InvalidFixedRate(self.fixed_rate_per_hour));
        }
        if self.min_hours_per_week < Decimal::ZERO {
            return Err(DeductionError::InvalidMinHours(self.min_hours_per_week));
        }
        for rate in [
            self.furniture_depreciation_rate,
            self.equipment_depreciation_rate,
        ] {
            if rate <= Decimal::ZERO || rate > Decimal::ONE {
                return Err(DeductionError::InvalidDepreciationRate(rate));
            }
        }
        if self.office_share_scrutiny_threshold <= Decimal::ZERO
            || self.office_share_scrutiny_threshold > Decimal::ONE
        {
            return Err(DeductionError::InvalidScrutinyThreshold(
                self.office_share_scrutiny_threshold,
            ));
        }
        if self.default_weeks_per_year < Decimal::ONE
            || self.default_weeks_per_year > Decimal::from(53)
        {
            return Err(DeductionError::InvalidWeeksPerYear(
                self.default_weeks_per_year,
            ));
        }
        Ok(())
    }
}

/// Calculator for the deduction method selection.
///
/// State-free: identical inputs always produce an identical
/// [`DeductionResult`]. All monetary outputs are rounded once, at the
/// result boundary.
#[derive(Debug, Clone)]
pub struct DeductionWorksheet {
    config: DeductionConfig,
}

impl DeductionWorksheet {
    pub fn new(config: DeductionConfig) -> Self {
        Self { config }
    }

    /// Computes both estimates, the eligibility block, and the
    /// recommended method.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionError`] for invalid configuration, a
    /// non-positive home area, negative inputs, an out-of-range weeks
    /// value, or an office larger than the home.
    pub fn calculate(
        &self,
        inputs: &DeductionInputs,
    ) -> Result<DeductionResult, DeductionError> {
        self.config.validate()?;
        self.check_inputs(inputs)?;

        let weeks_per_year = inputs
            .weeks_per_year
            .unwrap_or(self.config.default_weeks_per_year);

        let office_percentage = inputs.office_area_sqm / inputs.home_area_sqm;

        let eligibility = self.assess_eligibility(inputs, office_percentage);

        let fixed_rate_total = self.fixed_rate_estimate(
            inputs.hours_per_week,
            weeks_per_year,
            eligibility.is_eligible,
        );

        let breakdown = self.apportion_expenses(&inputs.expenses, office_percentage);
        let actual_cost_total = breakdown.0;
        let breakdown = breakdown.1;

        let (recommended_method, recommended_total) =
            self.recommend(fixed_rate_total, actual_cost_total);
        let savings = (actual_cost_total - fixed_rate_total).abs();

        Ok(DeductionResult {
            fixed_rate_total: round_half_up(fixed_rate_total),
            actual_cost_total: round_half_up(actual_cost_total),
            office_percentage: office_percentage
                .round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero),
            actual_cost_breakdown: ExpenseBreakdown {
                utilities: round_half_up(breakdown.utilities),
                cleaning: round_half_up(breakdown.cleaning),
                internet_phone: round_half_up(breakdown.internet_phone),
                rent_or_mortgage_interest: round_half_up(breakdown.rent_or_mortgage_interest),
                insurance: round_half_up(breakdown.insurance),
                council_rates: round_half_up(breakdown.council_rates),
                furniture_depreciation: round_half_up(breakdown.furniture_depreciation),
                equipment_depreciation: round_half_up(breakdown.equipment_depreciation),
            },
            recommended_method,
            recommended_total: round_half_up(recommended_total),
            savings: round_half_up(savings),
            eligibility,
        })
    }

    /// Rejects inputs the worksheet cannot meaningfully compute over.
    fn check_inputs(
        &self,
        inputs: &DeductionInputs,
    ) -> Result<(), DeductionError> {
        if inputs.home_area_sqm <= Decimal::ZERO {
            return Err(DeductionError::HomeAreaNotPositive(inputs.home_area_sqm));
        }
        if inputs.office_area_sqm < Decimal::ZERO {
            return Err(DeductionError::NegativeOfficeArea(inputs.office_area_sqm));
        }
        if inputs.hours_per_week < Decimal::ZERO {
            return Err(DeductionError::NegativeHours(inputs.hours_per_week));
        }
        if let Some(weeks) = inputs.weeks_per_year
            && (weeks < Decimal::ONE || weeks > Decimal::from(53))
        {
            return Err(DeductionError::InvalidWeeksPerYear(weeks));
        }
        if inputs.office_area_sqm > inputs.home_area_sqm {
            return Err(DeductionError::OfficeExceedsHome {
                office: inputs.office_area_sqm,
                home: inputs.home_area_sqm,
            });
        }
        Ok(())
    }

    /// Runs the eligibility gate and collects advisory warnings.
    fn assess_eligibility(
        &self,
        inputs: &DeductionInputs,
        office_percentage: Decimal,
    ) -> EligibilityAssessment {
        let meets_minimum_hours = inputs.hours_per_week >= self.config.min_hours_per_week;
        let has_dedicated_space = inputs.office_area_sqm > Decimal::ZERO;
        let is_eligible = meets_minimum_hours && has_dedicated_space;

        let mut warnings = Vec::new();
        if !meets_minimum_hours {
            warnings.push(EligibilityWarning::BelowMinimumHours);
        }
        if !has_dedicated_space {
            warnings.push(EligibilityWarning::NoDedicatedSpace);
        }
        if office_percentage > self.config.office_share_scrutiny_threshold {
            warnings.push(EligibilityWarning::HighOfficeShare);
        }
        if inputs.employment == EmploymentType::Employee
            && self.occupancy_total(&inputs.expenses) > Decimal::ZERO
        {
            warnings.push(EligibilityWarning::EmployeeOccupancyClaim);
        }

        if !is_eligible {
            warn!(
                hours_per_week = %inputs.hours_per_week,
                min_hours = %self.config.min_hours_per_week,
                office_area_sqm = %inputs.office_area_sqm,
                "claimant ineligible for fixed-rate method; estimate zeroed"
            );
        }

        EligibilityAssessment {
            meets_minimum_hours,
            has_dedicated_space,
            is_eligible,
            warnings,
        }
    }

    /// Fixed-rate estimate: hours per year times the fixed rate.
    /// Exactly zero for ineligible claimants.
    fn fixed_rate_estimate(
        &self,
        hours_per_week: Decimal,
        weeks_per_year: Decimal,
        is_eligible: bool,
    ) -> Decimal {
        if !is_eligible {
            return Decimal::ZERO;
        }
        hours_per_week * weeks_per_year * self.config.fixed_rate_per_hour
    }

    fn occupancy_total(
        &self,
        expenses: &ExpenseProfile,
    ) -> Decimal {
        expenses.rent_or_mortgage_interest + expenses.insurance + expenses.council_rates
    }

    /// Apportions running and occupancy expenses by office share and
    /// adds unapportioned straight-line depreciation. Returns the
    /// unrounded total and the unrounded per-category breakdown.
    fn apportion_expenses(
        &self,
        expenses: &ExpenseProfile,
        office_percentage: Decimal,
    ) -> (Decimal, ExpenseBreakdown) {
        let breakdown = ExpenseBreakdown {
            utilities: expenses.utilities * office_percentage,
            cleaning: expenses.cleaning * office_percentage,
            internet_phone: expenses.internet_phone * office_percentage,
            rent_or_mortgage_interest: expenses.rent_or_mortgage_interest * office_percentage,
            insurance: expenses.insurance * office_percentage,
            council_rates: expenses.council_rates * office_percentage,
            furniture_depreciation: expenses.furniture_value
                * self.config.furniture_depreciation_rate,
            equipment_depreciation: expenses.equipment_value
                * self.config.equipment_depreciation_rate,
        };

        let total = breakdown.utilities
            + breakdown.cleaning
            + breakdown.internet_phone
            + breakdown.rent_or_mortgage_interest
            + breakdown.insurance
            + breakdown.council_rates
            + breakdown.furniture_depreciation
            + breakdown.equipment_depreciation;

        (total, breakdown)
    }

    /// Picks the larger estimate; a tie favours the fixed-rate method
    /// for its simpler substantiation.
    fn recommend(
        &self,
        fixed_rate_total: Decimal,
        actual_cost_total: Decimal,
    ) -> (DeductionMethod, Decimal) {
        if actual_cost_total > fixed_rate_total {
            (DeductionMethod::ActualCost, actual_cost_total)
        } else {
            (DeductionMethod::FixedRate, fixed_rate_total)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_config() -> DeductionConfig {
        DeductionConfig {
            fixed_rate_per_hour: dec!(0.67),
            min_hours_per_week: dec!(10),
            default_weeks_per_year: dec!(52),
            furniture_depreciation_rate: dec!(0.125),
            equipment_depreciation_rate: dec!(0.20),
            office_share_scrutiny_threshold: dec!(0.50),
        }
    }

    fn no_expenses() -> ExpenseProfile {
        ExpenseProfile {
            utilities: dec!(0),
            cleaning: dec!(0),
            internet_phone: dec!(0),
            rent_or_mortgage_interest: dec!(0),
            insurance: dec!(0),
            council_rates: dec!(0),
            furniture_value: dec!(0),
            equipment_value: dec!(0),
        }
    }

    fn test_inputs() -> DeductionInputs {
        DeductionInputs {
            home_area_sqm: dec!(150),
            office_area_sqm: dec!(15),
            hours_per_week: dec!(40),
            weeks_per_year: Some(dec!(52)),
            expenses: ExpenseProfile {
                utilities: dec!(3000),
                cleaning: dec!(1500),
                internet_phone: dec!(1500),
                ..no_expenses()
            },
            employment: EmploymentType::SoleTrader,
        }
    }

    // =========================================================================
    // config validation tests
    // =========================================================================

    #[test]
    fn validate_accepts_reference_config() {
        assert_eq!(test_config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_fixed_rate() {
        let mut config = test_config();
        config.fixed_rate_per_hour = dec!(0);

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidFixedRate(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_out_of_range_depreciation_rate() {
        let mut config = test_config();
        config.equipment_depreciation_rate = dec!(1.5);

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidDepreciationRate(dec!(1.5)))
        );
    }

    // =========================================================================
    // input checking tests
    // =========================================================================

    #[test]
    fn calculate_rejects_zero_home_area() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.home_area_sqm = dec!(0);

        assert_eq!(
            worksheet.calculate(&inputs),
            Err(DeductionError::HomeAreaNotPositive(dec!(0)))
        );
    }

    #[test]
    fn calculate_rejects_office_larger_than_home() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.office_area_sqm = dec!(200);

        assert_eq!(
            worksheet.calculate(&inputs),
            Err(DeductionError::OfficeExceedsHome {
                office: dec!(200),
                home: dec!(150),
            })
        );
    }

    #[test]
    fn calculate_rejects_out_of_range_weeks() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.weeks_per_year = Some(dec!(60));

        assert_eq!(
            worksheet.calculate(&inputs),
            Err(DeductionError::InvalidWeeksPerYear(dec!(60)))
        );
    }

    // =========================================================================
    // method selection tests
    // =========================================================================

    #[test]
    fn calculate_reference_scenario() {
        let worksheet = DeductionWorksheet::new(test_config());

        let result = worksheet.calculate(&test_inputs()).unwrap();

        // Fixed rate: 40 * 52 * 0.67 = 1393.60
        assert_eq!(result.fixed_rate_total, dec!(1393.60));
        // Actual cost: 6000 * (15 / 150) = 600
        assert_eq!(result.actual_cost_total, dec!(600.00));
        assert_eq!(result.office_percentage, dec!(0.1000));
        assert_eq!(result.recommended_method, DeductionMethod::FixedRate);
        assert_eq!(result.recommended_total, dec!(1393.60));
        assert_eq!(result.savings, dec!(793.60));
        assert!(result.eligibility.is_eligible);
        assert!(result.eligibility.warnings.is_empty());
    }

    #[test]
    fn calculate_is_idempotent() {
        let worksheet = DeductionWorksheet::new(test_config());
        let inputs = test_inputs();

        let first = worksheet.calculate(&inputs).unwrap();
        let second = worksheet.calculate(&inputs).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn hours_below_minimum_zeroes_fixed_rate_only() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.hours_per_week = dec!(5);

        let result = worksheet.calculate(&inputs).unwrap();

        assert_eq!(result.fixed_rate_total, dec!(0.00));
        // Actual cost is unaffected by the hours gate.
        assert_eq!(result.actual_cost_total, dec!(600.00));
        assert!(!result.eligibility.meets_minimum_hours);
        assert!(!result.eligibility.is_eligible);
        assert!(
            result
                .eligibility
                .warnings
                .contains(&EligibilityWarning::BelowMinimumHours)
        );
        assert_eq!(result.recommended_method, DeductionMethod::ActualCost);
    }

    #[test]
    fn no_office_space_zeroes_fixed_rate() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.office_area_sqm = dec!(0);

        let result = worksheet.calculate(&inputs).unwrap();

        assert_eq!(result.fixed_rate_total, dec!(0.00));
        assert_eq!(result.actual_cost_total, dec!(0.00));
        assert!(!result.eligibility.has_dedicated_space);
        assert!(
            result
                .eligibility
                .warnings
                .contains(&EligibilityWarning::NoDedicatedSpace)
        );
    }

    #[test]
    fn tie_favours_fixed_rate() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        // Make the actual-cost total equal the fixed-rate total.
        inputs.expenses = ExpenseProfile {
            utilities: dec!(13936),
            ..no_expenses()
        };

        let result = worksheet.calculate(&inputs).unwrap();

        assert_eq!(result.fixed_rate_total, result.actual_cost_total);
        assert_eq!(result.recommended_method, DeductionMethod::FixedRate);
        assert_eq!(result.savings, dec!(0.00));
    }

    // =========================================================================
    // actual cost tests
    // =========================================================================

    #[test]
    fn depreciation_is_not_apportioned_by_area() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.expenses = ExpenseProfile {
            furniture_value: dec!(4000),
            equipment_value: dec!(2500),
            ..no_expenses()
        };

        let result = worksheet.calculate(&inputs).unwrap();

        // 4000 / 8 = 500; 2500 / 5 = 500. No 10% office share applied.
        assert_eq!(result.actual_cost_breakdown.furniture_depreciation, dec!(500.00));
        assert_eq!(result.actual_cost_breakdown.equipment_depreciation, dec!(500.00));
        assert_eq!(result.actual_cost_total, dec!(1000.00));
    }

    #[test]
    fn occupancy_expenses_are_apportioned() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.expenses = ExpenseProfile {
            rent_or_mortgage_interest: dec!(24000),
            insurance: dec!(1800),
            council_rates: dec!(2200),
            ..no_expenses()
        };

        let result = worksheet.calculate(&inputs).unwrap();

        assert_eq!(
            result.actual_cost_breakdown.rent_or_mortgage_interest,
            dec!(2400.00)
        );
        assert_eq!(result.actual_cost_breakdown.insurance, dec!(180.00));
        assert_eq!(result.actual_cost_breakdown.council_rates, dec!(220.00));
        assert_eq!(result.actual_cost_total, dec!(2800.00));
    }

    #[test]
    fn total_is_rounded_from_unrounded_categories() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.home_area_sqm = dec!(155);
        inputs.office_area_sqm = dec!(14);
        inputs.expenses = ExpenseProfile {
            utilities: dec!(2101.33),
            cleaning: dec!(977.45),
            insurance: dec!(1555.67),
            ..no_expenses()
        };

        let result = worksheet.calculate(&inputs).unwrap();

        // Total rounds the full-precision sum, not the rounded parts.
        let share = dec!(14) / dec!(155);
        let expected =
            round_half_up((dec!(2101.33) + dec!(977.45) + dec!(1555.67)) * share);
        assert_eq!(result.actual_cost_total, expected);
    }

    // =========================================================================
    // warning tests
    // =========================================================================

    #[test]
    fn high_office_share_warns_without_blocking() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.office_area_sqm = dec!(90);

        let result = worksheet.calculate(&inputs).unwrap();

        assert!(
            result
                .eligibility
                .warnings
                .contains(&EligibilityWarning::HighOfficeShare)
        );
        assert!(result.eligibility.is_eligible);
        assert!(result.fixed_rate_total > dec!(0));
    }

    #[test]
    fn employee_occupancy_claim_warns() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.employment = EmploymentType::Employee;
        inputs.expenses.rent_or_mortgage_interest = dec!(24000);

        let result = worksheet.calculate(&inputs).unwrap();

        assert!(
            result
                .eligibility
                .warnings
                .contains(&EligibilityWarning::EmployeeOccupancyClaim)
        );
    }

    // =========================================================================
    // logging tests
    // =========================================================================

    #[test]
    fn ineligible_claimant_emits_warning_event() {
        let worksheet = DeductionWorksheet::new(test_config());
        let mut inputs = test_inputs();
        inputs.hours_per_week = dec!(5);

        let output = crate::calculations::common::capture::warnings_from(|| {
            worksheet.calculate(&inputs).unwrap();
        });

        assert!(output.contains("ineligible for fixed-rate method"));
        assert!(output.contains("hours_per_week=5"));
    }

    #[test]
    fn eligible_claimant_emits_no_warning_event() {
        let worksheet = DeductionWorksheet::new(test_config());

        let output = crate::calculations::common::capture::warnings_from(|| {
            worksheet.calculate(&test_inputs()).unwrap();
        });

        assert_eq!(output, "");
    }
}
