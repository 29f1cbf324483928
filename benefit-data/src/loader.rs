use std::io::Read;

use benefit_core::TaxBracket;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("bracket table is empty")]
    EmptyTable,

    #[error("bracket {index}: max {max} is not above min {min}")]
    InvertedBounds {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("bracket {index}: min {min} does not follow previous max {prev_max}")]
    NotContiguous {
        index: usize,
        min: Decimal,
        prev_max: Decimal,
    },

    #[error("bracket {index}: only the last bracket may be unbounded")]
    UnboundedNotLast { index: usize },

    #[error("last bracket must be unbounded (empty max_income)")]
    BoundedTop,

    #[error("bracket {index}: rate {rate} must be between 0 and 1")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {index}: threshold {threshold} exceeds min {min}")]
    ThresholdAboveMin {
        index: usize,
        threshold: Decimal,
        min: Decimal,
    },
}

impl From<csv::Error> for BracketLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket table CSV file.
///
/// Columns:
/// - `tax_year`: the tax year the row belongs to (e.g. 2025)
/// - `min_income`: published minimum income for the bracket
/// - `max_income`: maximum income (empty for the unbounded top bracket)
/// - `threshold`: income the marginal rate applies from
/// - `rate`: marginal rate as a decimal (e.g. 0.30)
/// - `base_tax`: tax accumulated below the threshold
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct BracketRecord {
    tax_year: i32,
    min_income: Decimal,
    max_income: Option<Decimal>,
    threshold: Decimal,
    rate: Decimal,
    base_tax: Decimal,
}

/// Parses and validates bracket table CSV files.
pub struct BracketLoader;

impl BracketLoader {
    /// Parses a bracket table from a CSV reader and validates its
    /// structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BracketLoaderError`] for malformed CSV or a table
    /// that is empty, out of order, overlapping, gapped, or missing
    /// its unbounded top bracket.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracket>, BracketLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut brackets = Vec::new();
        for record in csv_reader.deserialize::<BracketRecord>() {
            let record = record?;
            brackets.push(TaxBracket {
                tax_year: record.tax_year,
                min_income: record.min_income,
                max_income: record.max_income,
                threshold_income: record.threshold,
                tax_rate: record.rate,
                base_tax: record.base_tax,
            });
        }

        Self::validate_table(&brackets)?;
        Ok(brackets)
    }

    /// Checks the table invariants: ascending, contiguous,
    /// non-overlapping, exactly one unbounded top bracket, rates in
    /// range, thresholds at or below their bracket minimum.
    pub fn validate_table(brackets: &[TaxBracket]) -> Result<(), BracketLoaderError> {
        if brackets.is_empty() {
            return Err(BracketLoaderError::EmptyTable);
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(BracketLoaderError::InvalidRate {
                    index,
                    rate: bracket.tax_rate,
                });
            }
            if bracket.threshold_income > bracket.min_income {
                return Err(BracketLoaderError::ThresholdAboveMin {
                    index,
                    threshold: bracket.threshold_income,
                    min: bracket.min_income,
                });
            }
            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(BracketLoaderError::InvertedBounds {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                None if index != brackets.len() - 1 => {
                    return Err(BracketLoaderError::UnboundedNotLast { index });
                }
                _ => {}
            }
        }

        for (index, pair) in brackets.windows(2).enumerate() {
            // The previous bracket is bounded here; an unbounded one
            // anywhere but last was rejected above.
            let prev_max = pair[0].max_income.unwrap_or(Decimal::MAX);
            if pair[1].min_income != prev_max + Decimal::ONE {
                return Err(BracketLoaderError::NotContiguous {
                    index: index + 1,
                    min: pair[1].min_income,
                    prev_max,
                });
            }
        }

        if brackets
            .last()
            .is_some_and(|bracket| bracket.max_income.is_some())
        {
            return Err(BracketLoaderError::BoundedTop);
        }

        Ok(())
    }
}
