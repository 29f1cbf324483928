use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net benefit of claiming the deduction for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualNetBenefit {
    /// The deduction amount being valued.
    pub gross_deduction: Decimal,

    /// Cash value of the deduction at the claimant's marginal rate.
    pub tax_savings: Decimal,

    /// Advisory fees charged for the year.
    pub fees: Decimal,

    /// `tax_savings - fees`. Can be negative.
    pub net_benefit: Decimal,

    /// Marginal rate (bracket rate plus levy) used to value the
    /// deduction.
    pub marginal_rate: Decimal,

    /// Fees divided by annual tax savings; `None` when tax savings
    /// are zero.
    pub break_even_ratio: Option<Decimal>,
}

/// One year of the lifetime projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyNetBenefit {
    /// 1-based projection year.
    pub year: u32,
    pub net_benefit: Decimal,
    pub cumulative: Decimal,
}

/// Year-by-year net benefit from the current age to retirement.
///
/// Year 1 carries the full implementation fee; every later year
/// carries only the steady-state recurring fee. Savings are assumed
/// constant over the horizon (no inflation or rate changes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeProjection {
    pub horizon_years: u32,
    pub annual_tax_savings: Decimal,
    pub year_one_net_benefit: Decimal,
    pub ongoing_net_benefit: Decimal,
    pub yearly: Vec<YearlyNetBenefit>,
    pub total_net_benefit: Decimal,

    /// First year the cumulative total turns non-negative; `None`
    /// when it never does within the horizon.
    pub break_even_year: Option<u32>,
}

/// Outcome of directing the projected net benefit at the home loan as
/// extra principal each month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageAcceleration {
    pub loan_amount: Decimal,
    pub monthly_payment: Decimal,
    pub baseline_months: u32,
    pub months_to_payoff: u32,
    pub years_reduced: Decimal,
    pub baseline_total_interest: Decimal,
    pub accelerated_total_interest: Decimal,
    pub interest_saved: Decimal,
}

/// Outcome of contributing the projected net benefit into a
/// concessionally taxed superannuation fund each year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperannuationBoost {
    pub horizon_years: u32,

    /// Pre-tax fund return net of the fund earnings tax.
    pub effective_annual_rate: Decimal,

    pub total_contributions: Decimal,
    pub final_balance: Decimal,
    pub growth_earned: Decimal,
}

/// Future-value comparison of holding the current property versus
/// upgrading to a higher-value one, net of transaction costs and the
/// cumulative advisory fees over the same horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyUpgradeComparison {
    pub horizon_years: u32,
    pub current_future_value: Decimal,
    pub upgrade_future_value: Decimal,
    pub transaction_costs: Decimal,
    pub cumulative_fees: Decimal,

    /// Upgrade future value less current future value less
    /// transaction costs.
    pub upgrade_advantage: Decimal,

    /// `upgrade_advantage` less cumulative advisory fees.
    pub net_advantage_after_fees: Decimal,

    pub is_viable_after_fees: bool,
}
