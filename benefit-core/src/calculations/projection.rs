//! Single-year and lifetime net benefit projections.
//!
//! [`NetBenefitProjector`] composes the tax schedule and the advisory
//! fee schedule into "what is the claim worth after fees" figures:
//!
//! - a single-year net benefit (tax savings less that year's fees);
//! - a lifetime projection from the client's age to retirement, where
//!   year 1 carries the full implementation fee and every later year
//!   only the steady-state recurring fee;
//! - three independent reinvestment scenarios layered on the same
//!   year-1 / year-2+ split: mortgage acceleration, superannuation
//!   compounding, and a property-upgrade wealth comparison.
//!
//! The scenarios are illustrations of where the money could go; none
//! of them feed back into deduction eligibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{compound, round_half_up};
use crate::calculations::tax::{TaxSchedule, TaxScheduleError};
use crate::models::{
    AnnualNetBenefit, FeeSchedule, LifetimeProjection, MortgageAcceleration,
    PropertyUpgradeComparison, SuperannuationBoost, YearlyNetBenefit,
};

/// Errors that can occur during net benefit projection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(transparent)]
    Tax(#[from] TaxScheduleError),

    /// The mortgage rate must be between 0 and 1 exclusive.
    #[error("mortgage annual rate must be between 0 and 1, got {0}")]
    InvalidMortgageRate(Decimal),

    /// The mortgage term must be at least one month.
    #[error("mortgage term must be at least one month, got {0}")]
    InvalidMortgageTerm(u32),

    /// A return or growth rate must be between 0 and 1.
    #[error("rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// The retirement age must leave at least one projection year.
    #[error("current age {current_age} leaves no years before retirement at {retirement_age}")]
    NoYearsToRetirement {
        current_age: u32,
        retirement_age: u32,
    },

    /// The loan amount must be positive.
    #[error("loan amount must be positive, got {0}")]
    NonPositiveLoanAmount(Decimal),

    /// The property value must be positive.
    #[error("property value must be positive, got {0}")]
    NonPositivePropertyValue(Decimal),

    /// The upgrade property must be worth more than the current one.
    #[error("upgrade value {upgrade} does not exceed current value {current}")]
    UpgradeNotHigher { current: Decimal, upgrade: Decimal },
}

/// Scenario parameters for the projections, loaded as per-year
/// configuration alongside the fee schedule.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use benefit_core::calculations::ProjectionParams;
///
/// let params = ProjectionParams {
///     default_retirement_age: 65,
///     mortgage_annual_rate: dec!(0.06),
///     mortgage_term_months: 360,
///     super_annual_return: dec!(0.07),
///     super_fund_tax_rate: dec!(0.15),
///     current_property_growth_rate: dec!(0.03),
///     upgrade_property_growth_rate: dec!(0.04),
///     property_transaction_cost_rate: dec!(0.055),
/// };
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Retirement age the lifetime horizon runs to.
    pub default_retirement_age: u32,

    /// Standard variable home loan rate for the mortgage scenario.
    pub mortgage_annual_rate: Decimal,

    /// Loan term cap in months (a standard 30-year loan is 360).
    pub mortgage_term_months: u32,

    /// Pre-tax annual return assumed for the superannuation fund.
    pub super_annual_return: Decimal,

    /// Fund earnings tax rate applied to the pre-tax return.
    pub super_fund_tax_rate: Decimal,

    /// Real (inflation-adjusted) growth rate of the current property.
    pub current_property_growth_rate: Decimal,

    /// Real growth rate assumed for the upgrade property.
    pub upgrade_property_growth_rate: Decimal,

    /// Stamp duty, agent and legal costs as a fraction of the upgrade
    /// property's value.
    pub property_transaction_cost_rate: Decimal,
}

impl ProjectionParams {
    /// Validates the scenario parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if any rate is outside (0, 1) (the
    /// growth and tax rates may be zero), the mortgage term is zero,
    /// or the retirement age is zero.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.mortgage_annual_rate <= Decimal::ZERO || self.mortgage_annual_rate >= Decimal::ONE
        {
            return Err(ProjectionError::InvalidMortgageRate(
                self.mortgage_annual_rate,
            ));
        }
        if self.mortgage_term_months == 0 {
            return Err(ProjectionError::InvalidMortgageTerm(
                self.mortgage_term_months,
            ));
        }
        for rate in [
            self.super_annual_return,
            self.super_fund_tax_rate,
            self.current_property_growth_rate,
            self.upgrade_property_growth_rate,
            self.property_transaction_cost_rate,
        ] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(ProjectionError::InvalidRate(rate));
            }
        }
        if self.default_retirement_age == 0 {
            return Err(ProjectionError::NoYearsToRetirement {
                current_age: 0,
                retirement_age: 0,
            });
        }
        Ok(())
    }
}

/// Projects net benefit over one year and over the lifetime horizon,
/// plus the three reinvestment scenarios.
#[derive(Debug, Clone)]
pub struct NetBenefitProjector<'a> {
    tax: TaxSchedule<'a>,
    fees: &'a FeeSchedule,
    params: ProjectionParams,
}

impl<'a> NetBenefitProjector<'a> {
    pub fn new(
        tax: TaxSchedule<'a>,
        fees: &'a FeeSchedule,
        params: ProjectionParams,
    ) -> Self {
        Self { tax, fees, params }
    }

    /// Net benefit of the deduction for a single year with the given
    /// fees.
    ///
    /// The break-even ratio (fees over annual tax savings) is `None`
    /// when the savings are zero rather than a division by zero.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if the tax schedule cannot value
    /// the deduction.
    pub fn annual(
        &self,
        deduction: Decimal,
        taxable_income: Decimal,
        fees_for_year: Decimal,
    ) -> Result<AnnualNetBenefit, ProjectionError> {
        let marginal_rate = self.tax.marginal_rate(taxable_income)?;
        let tax_savings = self.tax.tax_savings(deduction, taxable_income)?;

        let break_even_ratio = if tax_savings > Decimal::ZERO {
            Some(round_half_up(fees_for_year / tax_savings))
        } else {
            None
        };

        Ok(AnnualNetBenefit {
            gross_deduction: round_half_up(deduction),
            tax_savings,
            fees: round_half_up(fees_for_year),
            net_benefit: round_half_up(tax_savings - fees_for_year),
            marginal_rate,
            break_even_ratio,
        })
    }

    /// Year-by-year net benefit from `current_age` to the configured
    /// retirement age.
    ///
    /// Savings are assumed constant across the horizon; no inflation
    /// or rate changes are modelled.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if the parameters are invalid, the
    /// client is already at or past retirement age, or the tax
    /// schedule cannot value the deduction.
    pub fn lifetime(
        &self,
        deduction: Decimal,
        taxable_income: Decimal,
        current_age: u32,
    ) -> Result<LifetimeProjection, ProjectionError> {
        self.params.validate()?;
        let horizon_years = self.horizon_years(current_age)?;

        let annual_tax_savings = self.tax.tax_savings(deduction, taxable_income)?;
        let year_one_net_benefit = round_half_up(annual_tax_savings - self.fees.year_one_fee());
        let ongoing_net_benefit =
            round_half_up(annual_tax_savings - self.fees.steady_state_annual_fee());

        let mut yearly = Vec::with_capacity(horizon_years as usize);
        let mut cumulative = Decimal::ZERO;
        let mut break_even_year = None;
        for year in 1..=horizon_years {
            let net_benefit = if year == 1 {
                year_one_net_benefit
            } else {
                ongoing_net_benefit
            };
            cumulative += net_benefit;
            if break_even_year.is_none() && cumulative >= Decimal::ZERO {
                break_even_year = Some(year);
            }
            yearly.push(YearlyNetBenefit {
                year,
                net_benefit,
                cumulative,
            });
        }

        Ok(LifetimeProjection {
            horizon_years,
            annual_tax_savings,
            year_one_net_benefit,
            ongoing_net_benefit,
            yearly,
            total_net_benefit: cumulative,
            break_even_year,
        })
    }

    /// Simulates directing the projected net benefit at the home loan
    /// as extra principal each month.
    ///
    /// Standard month-by-month amortization, capped at the configured
    /// term. Months 1-12 use the year-1 net benefit, later months the
    /// ongoing amount, each split into twelve instalments. Years with
    /// a negative net benefit contribute nothing (the loan cannot be
    /// drawn against).
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] for invalid parameters or a
    /// non-positive loan amount.
    pub fn mortgage_acceleration(
        &self,
        loan_amount: Decimal,
        projection: &LifetimeProjection,
    ) -> Result<MortgageAcceleration, ProjectionError> {
        self.params.validate()?;
        if loan_amount <= Decimal::ZERO {
            return Err(ProjectionError::NonPositiveLoanAmount(loan_amount));
        }

        let monthly_rate = self.params.mortgage_annual_rate / Decimal::from(12);
        let term = self.params.mortgage_term_months;
        let payment = self.monthly_payment(loan_amount, monthly_rate, term);

        let twelve = Decimal::from(12);
        let year_one_extra = projection.year_one_net_benefit.max(Decimal::ZERO) / twelve;
        let ongoing_extra = projection.ongoing_net_benefit.max(Decimal::ZERO) / twelve;
        if projection.year_one_net_benefit < Decimal::ZERO
            || projection.ongoing_net_benefit < Decimal::ZERO
        {
            warn!(
                year_one = %projection.year_one_net_benefit,
                ongoing = %projection.ongoing_net_benefit,
                "negative net benefit contributes no extra repayments"
            );
        }

        let (baseline_months, baseline_total_interest) =
            self.amortize(loan_amount, monthly_rate, payment, term, |_| Decimal::ZERO);
        let (months_to_payoff, accelerated_total_interest) =
            self.amortize(loan_amount, monthly_rate, payment, term, |month| {
                if month <= 12 { year_one_extra } else { ongoing_extra }
            });

        let years_reduced = round_half_up(
            Decimal::from(baseline_months.saturating_sub(months_to_payoff)) / twelve,
        );

        Ok(MortgageAcceleration {
            loan_amount,
            monthly_payment: round_half_up(payment),
            baseline_months,
            months_to_payoff,
            years_reduced,
            baseline_total_interest: round_half_up(baseline_total_interest),
            accelerated_total_interest: round_half_up(accelerated_total_interest),
            interest_saved: round_half_up(baseline_total_interest - accelerated_total_interest),
        })
    }

    /// Compounds the projected net benefit in a concessionally taxed
    /// fund: each year `(balance + contribution) * (1 + effective)`
    /// where the effective rate is the pre-tax return net of the fund
    /// earnings tax. Negative years contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] for invalid parameters.
    pub fn superannuation_boost(
        &self,
        projection: &LifetimeProjection,
    ) -> Result<SuperannuationBoost, ProjectionError> {
        self.params.validate()?;

        let effective_annual_rate =
            self.params.super_annual_return * (Decimal::ONE - self.params.super_fund_tax_rate);
        let growth_factor = Decimal::ONE + effective_annual_rate;

        let mut balance = Decimal::ZERO;
        let mut total_contributions = Decimal::ZERO;
        let mut clamped = false;
        for year in &projection.yearly {
            let contribution = year.net_benefit.max(Decimal::ZERO);
            clamped |= year.net_benefit < Decimal::ZERO;
            total_contributions += contribution;
            balance = (balance + contribution) * growth_factor;
        }
        if clamped {
            warn!("negative net benefit years contribute nothing to the fund");
        }

        Ok(SuperannuationBoost {
            horizon_years: projection.horizon_years,
            effective_annual_rate,
            total_contributions: round_half_up(total_contributions),
            final_balance: round_half_up(balance),
            growth_earned: round_half_up(balance - total_contributions),
        })
    }

    /// Compares the future value of keeping the current property
    /// against upgrading, net of transaction costs and the advisory
    /// fees paid over the same horizon.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] for invalid parameters,
    /// non-positive property values, or an upgrade value that does not
    /// exceed the current value.
    pub fn property_upgrade(
        &self,
        current_value: Decimal,
        upgrade_value: Decimal,
        projection: &LifetimeProjection,
    ) -> Result<PropertyUpgradeComparison, ProjectionError> {
        self.params.validate()?;
        if current_value <= Decimal::ZERO {
            return Err(ProjectionError::NonPositivePropertyValue(current_value));
        }
        if upgrade_value <= current_value {
            return Err(ProjectionError::UpgradeNotHigher {
                current: current_value,
                upgrade: upgrade_value,
            });
        }

        let horizon_years = projection.horizon_years;
        let current_future_value = current_value
            * compound(
                Decimal::ONE + self.params.current_property_growth_rate,
                horizon_years,
            );
        let upgrade_future_value = upgrade_value
            * compound(
                Decimal::ONE + self.params.upgrade_property_growth_rate,
                horizon_years,
            );
        let transaction_costs = upgrade_value * self.params.property_transaction_cost_rate;
        let cumulative_fees = self.cumulative_fees(horizon_years);

        let upgrade_advantage = upgrade_future_value - current_future_value - transaction_costs;
        let net_advantage_after_fees = upgrade_advantage - cumulative_fees;

        Ok(PropertyUpgradeComparison {
            horizon_years,
            current_future_value: round_half_up(current_future_value),
            upgrade_future_value: round_half_up(upgrade_future_value),
            transaction_costs: round_half_up(transaction_costs),
            cumulative_fees: round_half_up(cumulative_fees),
            upgrade_advantage: round_half_up(upgrade_advantage),
            net_advantage_after_fees: round_half_up(net_advantage_after_fees),
            is_viable_after_fees: net_advantage_after_fees > Decimal::ZERO,
        })
    }

    /// Years remaining before the configured retirement age.
    fn horizon_years(
        &self,
        current_age: u32,
    ) -> Result<u32, ProjectionError> {
        if current_age >= self.params.default_retirement_age {
            return Err(ProjectionError::NoYearsToRetirement {
                current_age,
                retirement_age: self.params.default_retirement_age,
            });
        }
        Ok(self.params.default_retirement_age - current_age)
    }

    /// Standard annuity payment for a fully amortizing loan.
    fn monthly_payment(
        &self,
        loan_amount: Decimal,
        monthly_rate: Decimal,
        term_months: u32,
    ) -> Decimal {
        let factor = compound(Decimal::ONE + monthly_rate, term_months);
        loan_amount * monthly_rate * factor / (factor - Decimal::ONE)
    }

    /// Walks the loan month by month, adding `extra(month)` to each
    /// principal repayment. Returns months to payoff (capped at the
    /// term) and total interest paid.
    fn amortize(
        &self,
        loan_amount: Decimal,
        monthly_rate: Decimal,
        payment: Decimal,
        term_months: u32,
        extra: impl Fn(u32) -> Decimal,
    ) -> (u32, Decimal) {
        let mut balance = loan_amount;
        let mut total_interest = Decimal::ZERO;
        let mut months = term_months;
        for month in 1..=term_months {
            let interest = balance * monthly_rate;
            total_interest += interest;
            balance -= payment - interest + extra(month);
            if balance <= Decimal::ZERO {
                months = month;
                break;
            }
        }
        (months, total_interest)
    }

    /// Advisory fees accumulated across the horizon: one
    /// implementation year plus steady-state years after it.
    fn cumulative_fees(
        &self,
        horizon_years: u32,
    ) -> Decimal {
        self.fees.year_one_fee()
            + self.fees.steady_state_annual_fee() * Decimal::from(horizon_years.saturating_sub(1))
    }
}
