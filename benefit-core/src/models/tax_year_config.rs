use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-tax-year constants for the deduction and levy calculations.
///
/// These values change with each federal budget and are loaded as
/// external configuration rather than compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    pub medicare_levy_rate: Decimal,
    pub fixed_rate_per_hour: Decimal,
    pub min_hours_per_week: Decimal,
    pub default_weeks_per_year: Decimal,
    pub furniture_depreciation_rate: Decimal,
    pub equipment_depreciation_rate: Decimal,
    pub office_share_scrutiny_threshold: Decimal,
    pub default_retirement_age: u32,
}
