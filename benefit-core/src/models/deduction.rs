use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment classification of the claimant.
///
/// Carried through to the result for reporting; employees claiming
/// occupancy expenses draw an advisory warning since those are
/// generally only deductible for a genuine place of business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    Employee,
    SoleTrader,
    Company,
    Trust,
}

/// Annual expense amounts for the actual-cost method.
///
/// Running and occupancy categories are apportioned by office share;
/// the capital categories hold asset values that depreciate without
/// area apportionment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseProfile {
    /// Electricity and gas for the whole home.
    pub utilities: Decimal,

    /// Cleaning costs for the whole home.
    pub cleaning: Decimal,

    /// Internet and phone. Shared-use services; the business-use
    /// proportion question is handled by validation, not here.
    pub internet_phone: Decimal,

    /// Rent or mortgage interest (occupancy).
    pub rent_or_mortgage_interest: Decimal,

    /// Home and contents insurance (occupancy).
    pub insurance: Decimal,

    /// Council rates (occupancy).
    pub council_rates: Decimal,

    /// Purchase value of office furniture (depreciating asset).
    pub furniture_value: Decimal,

    /// Purchase value of office equipment (depreciating asset).
    pub equipment_value: Decimal,
}

/// Input record for the deduction method selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionInputs {
    /// Total floor area of the home in square metres.
    pub home_area_sqm: Decimal,

    /// Floor area of the dedicated office space in square metres.
    /// Must not exceed `home_area_sqm`.
    pub office_area_sqm: Decimal,

    /// Hours worked from the home office per week.
    pub hours_per_week: Decimal,

    /// Working weeks per year. Defaults to the configured value
    /// (normally 52) when absent.
    pub weeks_per_year: Option<Decimal>,

    pub expenses: ExpenseProfile,

    pub employment: EmploymentType,
}

/// Which deduction method the worksheet recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionMethod {
    /// Fixed cents-per-hour rate, no itemised receipts required.
    FixedRate,
    /// Actual expenses apportioned by office floor share.
    ActualCost,
}

/// Advisory conditions raised during method selection. Non-fatal;
/// the calculation still completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityWarning {
    /// Weekly hours are below the minimum for the fixed-rate method.
    BelowMinimumHours,
    /// No dedicated office space was declared.
    NoDedicatedSpace,
    /// Office share of the home exceeds the scrutiny threshold.
    /// Legal, but likely to draw additional review.
    HighOfficeShare,
    /// Employee claiming occupancy expenses; generally not deductible
    /// without a genuine place of business.
    EmployeeOccupancyClaim,
}

/// Eligibility gate outcome for the fixed-rate method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityAssessment {
    pub meets_minimum_hours: bool,
    pub has_dedicated_space: bool,
    pub is_eligible: bool,
    pub warnings: Vec<EligibilityWarning>,
}

/// Per-category apportioned amounts behind the actual-cost total.
///
/// Each category is rounded at the result boundary; the actual-cost
/// total is computed from the unrounded values, so it can differ from
/// the sum of the rounded categories by a cent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub utilities: Decimal,
    pub cleaning: Decimal,
    pub internet_phone: Decimal,
    pub rent_or_mortgage_interest: Decimal,
    pub insurance: Decimal,
    pub council_rates: Decimal,
    pub furniture_depreciation: Decimal,
    pub equipment_depreciation: Decimal,
}

/// Immutable snapshot of a method selection.
///
/// Never mutated after computation; recalculating with the same inputs
/// produces an identical instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Fixed-rate estimate. Exactly zero when the claimant is
    /// ineligible for the method.
    pub fixed_rate_total: Decimal,

    /// Actual-cost estimate; computed even for ineligible claimants
    /// for information.
    pub actual_cost_total: Decimal,

    /// Office floor area as a fraction of home floor area.
    pub office_percentage: Decimal,

    pub actual_cost_breakdown: ExpenseBreakdown,

    /// The larger of the two estimates; ties favour the fixed-rate
    /// method (simpler substantiation).
    pub recommended_method: DeductionMethod,

    /// The estimate under the recommended method.
    pub recommended_total: Decimal,

    /// Absolute difference between the two estimates.
    pub savings: Decimal,

    pub eligibility: EligibilityAssessment,
}
