use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing a raw client record's numeric fields.
///
/// An absent field is not an error here; it flows through as `None`
/// and becomes a validation issue. A present-but-unparseable field is
/// a hard failure naming the field, never a silent zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldParseError {
    /// A field arrived as a string that is not a valid number.
    #[error("field '{field}' is not a valid number: '{value}'")]
    Unparseable { field: String, value: String },

    /// A field arrived as a negative amount where one is impossible.
    #[error("field '{field}' cannot be negative: {value}")]
    NegativeAmount { field: String, value: Decimal },
}

/// A client record as it arrives from the store, numeric fields still
/// string-typed. `parse` is the only way across the boundary into a
/// [`ClientRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClientRecord {
    pub client_ref: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub entity_type: Option<String>,

    pub home_area_sqm: Option<String>,
    pub office_area_sqm: Option<String>,
    pub hours_per_week: Option<String>,
    pub building_value: Option<String>,
    pub annual_income: Option<String>,

    pub utilities: Option<String>,
    pub cleaning: Option<String>,
    pub internet_phone: Option<String>,
    pub rent_or_mortgage_interest: Option<String>,
    pub insurance: Option<String>,
    pub council_rates: Option<String>,
    pub business_use_percentage: Option<String>,

    pub strategy_questionnaire_complete: bool,
    pub supporting_document_count: u32,
}

/// A client record with numeric fields parsed. Absent fields remain
/// `None` so the validation engine can flag them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_ref: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub entity_type: Option<String>,

    pub home_area_sqm: Option<Decimal>,
    pub office_area_sqm: Option<Decimal>,
    pub hours_per_week: Option<Decimal>,
    pub building_value: Option<Decimal>,
    pub annual_income: Option<Decimal>,

    pub utilities: Option<Decimal>,
    pub cleaning: Option<Decimal>,
    pub internet_phone: Option<Decimal>,
    pub rent_or_mortgage_interest: Option<Decimal>,
    pub insurance: Option<Decimal>,
    pub council_rates: Option<Decimal>,
    pub business_use_percentage: Option<Decimal>,

    pub strategy_questionnaire_complete: bool,
    pub supporting_document_count: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parses an optional string-typed amount.
///
/// Distinguishes three cases: absent (or blank) stays `None`,
/// unparseable fails with the field name, valid parses. Amount fields
/// additionally reject negative values.
fn parse_amount(
    field: &str,
    raw: &Option<String>,
) -> Result<Option<Decimal>, FieldParseError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<Decimal>()
        .map_err(|_| FieldParseError::Unparseable {
            field: field.to_string(),
            value: raw.clone(),
        })?;
    if value < Decimal::ZERO {
        return Err(FieldParseError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(Some(value))
}

impl RawClientRecord {
    /// Parses all numeric fields strictly, consuming the raw record.
    ///
    /// # Errors
    ///
    /// Returns [`FieldParseError`] for any present-but-unparseable
    /// number, or for a negative area/amount.
    pub fn parse(
        self,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<ClientRecord, FieldParseError> {
        Ok(ClientRecord {
            home_area_sqm: parse_amount("home_area_sqm", &self.home_area_sqm)?,
            office_area_sqm: parse_amount("office_area_sqm", &self.office_area_sqm)?,
            hours_per_week: parse_amount("hours_per_week", &self.hours_per_week)?,
            building_value: parse_amount("building_value", &self.building_value)?,
            annual_income: parse_amount("annual_income", &self.annual_income)?,
            utilities: parse_amount("utilities", &self.utilities)?,
            cleaning: parse_amount("cleaning", &self.cleaning)?,
            internet_phone: parse_amount("internet_phone", &self.internet_phone)?,
            rent_or_mortgage_interest: parse_amount(
                "rent_or_mortgage_interest",
                &self.rent_or_mortgage_interest,
            )?,
            insurance: parse_amount("insurance", &self.insurance)?,
            council_rates: parse_amount("council_rates", &self.council_rates)?,
            business_use_percentage: parse_amount(
                "business_use_percentage",
                &self.business_use_percentage,
            )?,
            client_ref: self.client_ref,
            full_name: self.full_name,
            email: self.email,
            entity_type: self.entity_type,
            strategy_questionnaire_complete: self.strategy_questionnaire_complete,
            supporting_document_count: self.supporting_document_count,
            created_at,
            updated_at,
        })
    }
}
