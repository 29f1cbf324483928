//! Progressive income tax and marginal rate calculations.
//!
//! [`TaxSchedule`] wraps a per-year resident bracket table plus the
//! flat medicare levy rate. It answers two distinct questions that
//! must not be conflated:
//!
//! - *tax payable* — [`TaxSchedule::total_tax`], computed from the
//!   bracket's base amount and marginal portion;
//! - *value of a deduction* — [`TaxSchedule::tax_savings`], computed
//!   at the marginal rate only. `total_tax(income)` is never
//!   `income * marginal_rate(income)`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use benefit_core::TaxBracket;
//! use benefit_core::calculations::TaxSchedule;
//!
//! let brackets = vec![
//!     TaxBracket {
//!         tax_year: 2025,
//!         min_income: dec!(0),
//!         max_income: Some(dec!(18200)),
//!         threshold_income: dec!(0),
//!         tax_rate: dec!(0),
//!         base_tax: dec!(0),
//!     },
//!     TaxBracket {
//!         tax_year: 2025,
//!         min_income: dec!(18201),
//!         max_income: Some(dec!(45000)),
//!         threshold_income: dec!(18200),
//!         tax_rate: dec!(0.16),
//!         base_tax: dec!(0),
//!     },
//!     TaxBracket {
//!         tax_year: 2025,
//!         min_income: dec!(45001),
//!         max_income: None,
//!         threshold_income: dec!(45000),
//!         tax_rate: dec!(0.30),
//!         base_tax: dec!(4288),
//!     },
//! ];
//!
//! let schedule = TaxSchedule::new(&brackets, dec!(0.02));
//!
//! assert_eq!(schedule.income_tax(dec!(45000)).unwrap(), dec!(4288.00));
//! assert_eq!(schedule.marginal_rate(dec!(95000)).unwrap(), dec!(0.32));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBracket;
use crate::calculations::common::round_half_up;

/// Errors that can occur when evaluating the tax schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxScheduleError {
    /// No tax brackets were provided.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// No bracket admits the given income; the table is malformed
    /// (missing its unbounded top bracket).
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// A per-year tax rate schedule: ordered brackets plus the flat
/// medicare levy rate.
#[derive(Debug, Clone)]
pub struct TaxSchedule<'a> {
    brackets: &'a [TaxBracket],
    medicare_levy_rate: Decimal,
}

impl<'a> TaxSchedule<'a> {
    /// Creates a schedule over a bracket table sorted ascending by
    /// `min_income`, contiguous, with an unbounded top bracket.
    pub fn new(
        brackets: &'a [TaxBracket],
        medicare_levy_rate: Decimal,
    ) -> Self {
        Self {
            brackets,
            medicare_levy_rate,
        }
    }

    /// Finds the bracket the income falls in.
    ///
    /// Ascending scan, first match wins: the first bracket whose upper
    /// bound admits the income takes it. An income equal to a
    /// bracket's `max_income` therefore lands in that bracket, and an
    /// income equal to the next bracket's published minimum lands in
    /// the next bracket.
    fn bracket_for(
        &self,
        income: Decimal,
    ) -> Result<&TaxBracket, TaxScheduleError> {
        if self.brackets.is_empty() {
            return Err(TaxScheduleError::NoTaxBrackets);
        }
        self.brackets
            .iter()
            .find(|b| b.max_income.is_none() || income <= b.max_income.unwrap_or(Decimal::MAX))
            .ok_or(TaxScheduleError::NoMatchingBracket(income))
    }

    /// Income tax payable on the given taxable income.
    ///
    /// Fails closed to zero for non-positive income. Within a bracket,
    /// tax is `base_tax + (income - threshold_income) * tax_rate`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] if the bracket table is empty or
    /// has no bracket for the income.
    pub fn income_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, TaxScheduleError> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let bracket = self.bracket_for(taxable_income)?;
        let marginal_income = taxable_income - bracket.threshold_income;
        let tax = bracket.base_tax + marginal_income * bracket.tax_rate;

        Ok(round_half_up(tax))
    }

    /// Medicare levy on the given taxable income.
    ///
    /// A flat percentage with no low-income exemption band. The real
    /// levy phases in over a threshold; this schedule deliberately
    /// does not model that.
    pub fn medicare_levy(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_half_up(taxable_income * self.medicare_levy_rate)
    }

    /// Income tax plus medicare levy.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] if the bracket table is empty or
    /// has no bracket for the income.
    pub fn total_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, TaxScheduleError> {
        Ok(round_half_up(
            self.income_tax(taxable_income)? + self.medicare_levy(taxable_income),
        ))
    }

    /// Rate applying to the next dollar of income: the matching
    /// bracket's rate plus the levy rate. Zero for non-positive
    /// income.
    ///
    /// Used to value deductions, never to compute tax payable.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] if the bracket table is empty or
    /// has no bracket for the income.
    pub fn marginal_rate(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, TaxScheduleError> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        let bracket = self.bracket_for(taxable_income)?;
        Ok(bracket.tax_rate + self.medicare_levy_rate)
    }

    /// Cash value of a deduction at the claimant's marginal rate.
    ///
    /// Treats the deduction as fully absorbed within the current
    /// bracket; a deduction large enough to drop the claimant into a
    /// lower bracket is still valued at the top rate. A deliberate
    /// simplification.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] if the bracket table is empty or
    /// has no bracket for the income.
    pub fn tax_savings(
        &self,
        deduction_amount: Decimal,
        taxable_income: Decimal,
    ) -> Result<Decimal, TaxScheduleError> {
        Ok(round_half_up(
            deduction_amount * self.marginal_rate(taxable_income)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn resident_brackets_2025() -> Vec<TaxBracket> {
        vec![
            TaxBracket {
                tax_year: 2025,
                min_income: dec!(0),
                max_income: Some(dec!(18200)),
                threshold_income: dec!(0),
                tax_rate: dec!(0),
                base_tax: dec!(0),
            },
            TaxBracket {
                tax_year: 2025,
                min_income: dec!(18201),
                max_income: Some(dec!(45000)),
                threshold_income: dec!(18200),
                tax_rate: dec!(0.16),
                base_tax: dec!(0),
            },
            TaxBracket {
                tax_year: 2025,
                min_income: dec!(45001),
                max_income: Some(dec!(135000)),
                threshold_income: dec!(45000),
                tax_rate: dec!(0.30),
                base_tax: dec!(4288),
            },
            TaxBracket {
                tax_year: 2025,
                min_income: dec!(135001),
                max_income: Some(dec!(190000)),
                threshold_income: dec!(135000),
                tax_rate: dec!(0.37),
                base_tax: dec!(31288),
            },
            TaxBracket {
                tax_year: 2025,
                min_income: dec!(190001),
                max_income: None,
                threshold_income: dec!(190000),
                tax_rate: dec!(0.45),
                base_tax: dec!(51638),
            },
        ]
    }

    fn schedule(brackets: &[TaxBracket]) -> TaxSchedule<'_> {
        TaxSchedule::new(brackets, dec!(0.02))
    }

    #[test]
    fn income_tax_zero_for_non_positive_income() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        assert_eq!(schedule.income_tax(dec!(0)), Ok(dec!(0)));
        assert_eq!(schedule.income_tax(dec!(-5000)), Ok(dec!(0)));
    }

    #[test]
    fn income_tax_zero_within_tax_free_threshold() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        assert_eq!(schedule.income_tax(dec!(18200)), Ok(dec!(0.00)));
    }

    #[test]
    fn income_tax_second_bracket() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        // 0 + (30000 - 18200) * 0.16 = 1888
        assert_eq!(schedule.income_tax(dec!(30000)), Ok(dec!(1888.00)));
    }

    #[test]
    fn income_tax_at_bracket_boundary_uses_lower_bracket() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        // Exactly 45,000 is taxed at 16%, not 30%.
        assert_eq!(schedule.income_tax(dec!(45000)), Ok(dec!(4288.00)));
    }

    #[test]
    fn income_tax_at_bracket_minimum_uses_that_bracket() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        // 4288 + (45001 - 45000) * 0.30
        assert_eq!(schedule.income_tax(dec!(45001)), Ok(dec!(4288.30)));
    }

    #[test]
    fn income_tax_top_bracket_is_unbounded() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        // 51638 + (250000 - 190000) * 0.45 = 78638
        assert_eq!(schedule.income_tax(dec!(250000)), Ok(dec!(78638.00)));
    }

    #[test]
    fn income_tax_errors_on_empty_table() {
        let brackets: Vec<TaxBracket> = vec![];
        let schedule = schedule(&brackets);

        assert_eq!(
            schedule.income_tax(dec!(50000)),
            Err(TaxScheduleError::NoTaxBrackets)
        );
    }

    #[test]
    fn medicare_levy_is_flat_percentage() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        assert_eq!(schedule.medicare_levy(dec!(95000)), dec!(1900.00));
        assert_eq!(schedule.medicare_levy(dec!(0)), dec!(0));
    }

    #[test]
    fn total_tax_adds_levy_to_income_tax() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        // Income tax: 4288 + (95000 - 45000) * 0.30 = 19288
        // Levy: 1900
        assert_eq!(schedule.total_tax(dec!(95000)), Ok(dec!(21188.00)));
    }

    #[test]
    fn total_tax_is_monotonic_in_income() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        let incomes = [
            dec!(0),
            dec!(18200),
            dec!(18201),
            dec!(45000),
            dec!(45001),
            dec!(95000),
            dec!(135000),
            dec!(190000),
            dec!(190001),
            dec!(300000),
        ];
        let mut previous = dec!(-1);
        for income in incomes {
            let tax = schedule.total_tax(income).unwrap();
            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
        }
    }

    #[test]
    fn marginal_rate_includes_levy() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        assert_eq!(schedule.marginal_rate(dec!(95000)), Ok(dec!(0.32)));
        assert_eq!(schedule.marginal_rate(dec!(200000)), Ok(dec!(0.47)));
    }

    #[test]
    fn marginal_rate_zero_for_non_positive_income() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        assert_eq!(schedule.marginal_rate(dec!(0)), Ok(dec!(0)));
    }

    #[test]
    fn total_tax_is_not_income_times_marginal_rate() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        let income = dec!(95000);
        let total = schedule.total_tax(income).unwrap();
        let flat = income * schedule.marginal_rate(income).unwrap();

        assert!(total < flat);
    }

    #[test]
    fn tax_savings_values_deduction_at_marginal_rate() {
        let brackets = resident_brackets_2025();
        let schedule = schedule(&brackets);

        // 1393.60 * 0.32 = 445.952 -> 445.95
        assert_eq!(
            schedule.tax_savings(dec!(1393.60), dec!(95000)),
            Ok(dec!(445.95))
        );
    }
}
