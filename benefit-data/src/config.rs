use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use benefit_core::calculations::ProjectionParams;
use benefit_core::{FeeSchedule, TaxYearConfig};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading key/value configuration files.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("missing configuration key '{0}'")]
    MissingKey(String),

    #[error("invalid value for key '{key}': '{value}'")]
    InvalidValue { key: String, value: String },
}

impl From<csv::Error> for ConfigLoaderError {
    fn from(err: csv::Error) -> Self {
        ConfigLoaderError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct KeyValueRecord {
    key: String,
    value: String,
}

/// A parsed key/value configuration file.
struct KeyValueTable(HashMap<String, String>);

impl KeyValueTable {
    fn parse<R: Read>(reader: R) -> Result<Self, ConfigLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut map = HashMap::new();
        for record in csv_reader.deserialize::<KeyValueRecord>() {
            let record = record?;
            map.insert(record.key, record.value);
        }
        Ok(Self(map))
    }

    fn get<T: FromStr>(
        &self,
        key: &str,
    ) -> Result<T, ConfigLoaderError> {
        let raw = self
            .0
            .get(key)
            .ok_or_else(|| ConfigLoaderError::MissingKey(key.to_string()))?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| ConfigLoaderError::InvalidValue {
                key: key.to_string(),
                value: raw.clone(),
            })
    }
}

/// Loads the per-tax-year configuration objects from their key/value
/// CSV files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a [`TaxYearConfig`] from a key/value CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoaderError`] for malformed CSV, a missing
    /// key, or an unparseable value.
    pub fn load_tax_year_config<R: Read>(reader: R) -> Result<TaxYearConfig, ConfigLoaderError> {
        let table = KeyValueTable::parse(reader)?;
        Ok(TaxYearConfig {
            tax_year: table.get("tax_year")?,
            medicare_levy_rate: table.get::<Decimal>("medicare_levy_rate")?,
            fixed_rate_per_hour: table.get("fixed_rate_per_hour")?,
            min_hours_per_week: table.get("min_hours_per_week")?,
            default_weeks_per_year: table.get("default_weeks_per_year")?,
            furniture_depreciation_rate: table.get("furniture_depreciation_rate")?,
            equipment_depreciation_rate: table.get("equipment_depreciation_rate")?,
            office_share_scrutiny_threshold: table.get("office_share_scrutiny_threshold")?,
            default_retirement_age: table.get("default_retirement_age")?,
        })
    }

    /// Loads a [`FeeSchedule`] from a key/value CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoaderError`] for malformed CSV, a missing
    /// key, or an unparseable value.
    pub fn load_fee_schedule<R: Read>(reader: R) -> Result<FeeSchedule, ConfigLoaderError> {
        let table = KeyValueTable::parse(reader)?;
        Ok(FeeSchedule {
            effective_year: table.get("effective_year")?,
            phase1_upfront: table.get("phase1_upfront")?,
            phase1_instalment: table.get("phase1_instalment")?,
            phase1_instalment_count: table.get("phase1_instalment_count")?,
            phase2_intro_fee: table.get("phase2_intro_fee")?,
            phase2_ongoing_fee: table.get("phase2_ongoing_fee")?,
            periods_per_year: table.get("periods_per_year")?,
        })
    }

    /// Loads [`ProjectionParams`] from a key/value CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoaderError`] for malformed CSV, a missing
    /// key, or an unparseable value.
    pub fn load_projection_params<R: Read>(
        reader: R,
    ) -> Result<ProjectionParams, ConfigLoaderError> {
        let table = KeyValueTable::parse(reader)?;
        Ok(ProjectionParams {
            default_retirement_age: table.get("default_retirement_age")?,
            mortgage_annual_rate: table.get("mortgage_annual_rate")?,
            mortgage_term_months: table.get("mortgage_term_months")?,
            super_annual_return: table.get("super_annual_return")?,
            super_fund_tax_rate: table.get("super_fund_tax_rate")?,
            current_property_growth_rate: table.get("current_property_growth_rate")?,
            upgrade_property_growth_rate: table.get("upgrade_property_growth_rate")?,
            property_transaction_cost_rate: table.get("property_transaction_cost_rate")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TAX_YEAR_CSV: &str = "\
key,value
tax_year,2025
medicare_levy_rate,0.02
fixed_rate_per_hour,0.67
min_hours_per_week,10
default_weeks_per_year,52
furniture_depreciation_rate,0.125
equipment_depreciation_rate,0.20
office_share_scrutiny_threshold,0.50
default_retirement_age,65
";

    #[test]
    fn load_tax_year_config_reads_all_keys() {
        let config = ConfigLoader::load_tax_year_config(TAX_YEAR_CSV.as_bytes()).unwrap();

        assert_eq!(config.tax_year, 2025);
        assert_eq!(config.fixed_rate_per_hour, dec!(0.67));
        assert_eq!(config.equipment_depreciation_rate, dec!(0.20));
        assert_eq!(config.default_retirement_age, 65);
    }

    #[test]
    fn load_tax_year_config_reports_missing_key() {
        let csv = "key,value\ntax_year,2025\n";

        let result = ConfigLoader::load_tax_year_config(csv.as_bytes());

        assert_eq!(
            result,
            Err(ConfigLoaderError::MissingKey(
                "medicare_levy_rate".to_string()
            ))
        );
    }

    #[test]
    fn load_tax_year_config_reports_unparseable_value() {
        let csv = TAX_YEAR_CSV.replace("0.67", "67c");

        let result = ConfigLoader::load_tax_year_config(csv.as_bytes());

        assert_eq!(
            result,
            Err(ConfigLoaderError::InvalidValue {
                key: "fixed_rate_per_hour".to_string(),
                value: "67c".to_string(),
            })
        );
    }

    #[test]
    fn load_fee_schedule_reads_all_keys() {
        let csv = "\
key,value
effective_year,2025
phase1_upfront,1495.00
phase1_instalment,250.00
phase1_instalment_count,6
phase2_intro_fee,149.00
phase2_ongoing_fee,95.00
periods_per_year,12
";

        let fees = ConfigLoader::load_fee_schedule(csv.as_bytes()).unwrap();

        assert_eq!(fees.year_one_fee(), dec!(2995.00));
        assert_eq!(fees.intro_annual_fee(), dec!(1788.00));
        assert_eq!(fees.steady_state_annual_fee(), dec!(1140.00));
        assert_eq!(fees.first_year_total(), dec!(4783.00));
    }

    #[test]
    fn load_projection_params_validates_downstream() {
        let csv = "\
key,value
default_retirement_age,65
mortgage_annual_rate,0.06
mortgage_term_months,360
super_annual_return,0.07
super_fund_tax_rate,0.15
current_property_growth_rate,0.03
upgrade_property_growth_rate,0.04
property_transaction_cost_rate,0.055
";

        let params = ConfigLoader::load_projection_params(csv.as_bytes()).unwrap();

        assert!(params.validate().is_ok());
        assert_eq!(params.mortgage_term_months, 360);
    }
}
