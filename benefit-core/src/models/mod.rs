mod client_record;
mod deduction;
mod fee_schedule;
mod issue;
mod projection;
mod tax_bracket;
mod tax_year_config;

pub use client_record::{ClientRecord, FieldParseError, RawClientRecord};
pub use deduction::{
    DeductionInputs, DeductionMethod, DeductionResult, EligibilityAssessment,
    EligibilityWarning, EmploymentType, ExpenseBreakdown, ExpenseProfile,
};
pub use fee_schedule::FeeSchedule;
pub use issue::{Severity, ValidationIssue};
pub use projection::{
    AnnualNetBenefit, LifetimeProjection, MortgageAcceleration, PropertyUpgradeComparison,
    SuperannuationBoost, YearlyNetBenefit,
};
pub use tax_bracket::TaxBracket;
pub use tax_year_config::TaxYearConfig;
