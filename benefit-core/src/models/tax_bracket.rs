use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single row of a resident tax rate schedule.
///
/// Brackets are stored ascending by `min_income` and must be contiguous
/// and non-overlapping; the top bracket has `max_income` of `None`.
/// Tax within a bracket is `base_tax + (income - threshold_income) * tax_rate`,
/// where `threshold_income` is the published threshold the marginal rate
/// applies from (e.g. $45,000 for the bracket starting at $45,001).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub tax_year: i32,
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub threshold_income: Decimal,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}
