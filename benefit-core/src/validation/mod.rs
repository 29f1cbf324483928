//! Client record and calculation result validation.
//!
//! [`ClientValidator`] inspects records for missing, implausible, or
//! out-of-range values and returns a typed issue list. It never
//! throws for data-quality findings and never auto-corrects: the
//! caller gets the full list and decides what to do, typically
//! showing provisional figures with a pending-review banner and
//! handing the list to [`crate::escalation::escalate`].

use rust_decimal::Decimal;

use crate::models::{ClientRecord, DeductionResult, Severity, ValidationIssue};

/// Fields a client record must carry before a claim can be worked on.
const REQUIRED_TEXT_FIELDS: &[(&str, &str)] = &[
    ("full_name", "client name is missing"),
    ("email", "contact email is missing"),
    ("entity_type", "legal structure is not recorded"),
];

const REQUIRED_NUMERIC_FIELDS: &[(&str, &str)] = &[
    ("home_area_sqm", "home floor area is missing"),
    ("office_area_sqm", "office floor area is missing"),
    ("hours_per_week", "weekly office hours are missing"),
];

const EXPENSE_LINE_ITEMS: &[&str] = &[
    "utilities",
    "cleaning",
    "internet_phone",
    "rent_or_mortgage_interest",
    "insurance",
    "council_rates",
];

/// Validates client records and computed results against the rule
/// set.
#[derive(Debug, Clone)]
pub struct ClientValidator {
    /// Office share of the home above which a claim draws extra
    /// scrutiny.
    office_share_scrutiny_threshold: Decimal,
}

impl ClientValidator {
    pub fn new(office_share_scrutiny_threshold: Decimal) -> Self {
        Self {
            office_share_scrutiny_threshold,
        }
    }

    /// Checks a client record for missing, implausible, or
    /// out-of-range values.
    ///
    /// Pure: collects issues, performs no side effects, and never
    /// fails. An empty list means the record is clean.
    pub fn validate(
        &self,
        record: &ClientRecord,
    ) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        self.check_required_fields(record, &mut issues);
        self.check_building_value(record, &mut issues);
        self.check_expense_items(record, &mut issues);
        self.check_areas(record, &mut issues);
        self.check_strategy_documents(record, &mut issues);

        issues
    }

    /// Sanity-checks a computed result against the record it was
    /// computed for. Failures here indicate an upstream calculation
    /// defect, not a client data problem, so everything is critical.
    pub fn validate_calculations(
        &self,
        record: &ClientRecord,
        result: &DeductionResult,
    ) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if result.fixed_rate_total < Decimal::ZERO {
            issues.push(ValidationIssue::critical(
                "fixed_rate_total",
                format!(
                    "fixed-rate estimate is negative ({}); calculation defect",
                    result.fixed_rate_total
                ),
            ));
        }
        if result.actual_cost_total < Decimal::ZERO {
            issues.push(ValidationIssue::critical(
                "actual_cost_total",
                format!(
                    "actual-cost estimate is negative ({}); calculation defect",
                    result.actual_cost_total
                ),
            ));
        }

        if let Some(income) = record.annual_income
            && result.recommended_total > income
        {
            issues.push(ValidationIssue::critical(
                "recommended_total",
                format!(
                    "recommended deduction {} exceeds reported annual income {}",
                    result.recommended_total, income
                ),
            ));
        }

        issues
    }

    /// Missing identity, contact, structure, area, or hours fields
    /// are errors needing manual review.
    fn check_required_fields(
        &self,
        record: &ClientRecord,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let text_values = [&record.full_name, &record.email, &record.entity_type];
        for ((field, message), value) in REQUIRED_TEXT_FIELDS.iter().zip(text_values) {
            let missing = value.as_deref().is_none_or(|v| v.trim().is_empty());
            if missing {
                issues.push(ValidationIssue::error(field, *message));
            }
        }

        let numeric_values = [
            record.home_area_sqm,
            record.office_area_sqm,
            record.hours_per_week,
        ];
        for ((field, message), value) in REQUIRED_NUMERIC_FIELDS.iter().zip(numeric_values) {
            if value.is_none() {
                issues.push(ValidationIssue::error(field, *message));
            }
        }
    }

    /// The building value feeds depreciation; without a positive
    /// value the calculation cannot be completed.
    fn check_building_value(
        &self,
        record: &ClientRecord,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match record.building_value {
            None => issues.push(ValidationIssue::critical(
                "building_value",
                "building value is missing; depreciation cannot be calculated",
            )),
            Some(value) if value <= Decimal::ZERO => issues.push(ValidationIssue::critical(
                "building_value",
                format!("building value must be positive, got {value}"),
            )),
            Some(_) => {}
        }
    }

    /// Missing expense lines and the shared-utility business-use
    /// percentage are advisory: the client needs to be chased, but
    /// computation proceeds.
    fn check_expense_items(
        &self,
        record: &ClientRecord,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let values = [
            record.utilities,
            record.cleaning,
            record.internet_phone,
            record.rent_or_mortgage_interest,
            record.insurance,
            record.council_rates,
        ];
        for (field, value) in EXPENSE_LINE_ITEMS.iter().zip(values) {
            if value.is_none() {
                issues.push(ValidationIssue::warning(
                    field,
                    "expense line item not provided; follow up with the client",
                ));
            }
        }

        if record.business_use_percentage.is_none() {
            issues.push(ValidationIssue::warning(
                "business_use_percentage",
                "business-use percentage for internet/phone not provided; \
                 the client needs to review a billing period to estimate it",
            ));
        }
    }

    /// An office larger than its home cannot be correct data; a very
    /// large office share is legal but gets flagged.
    fn check_areas(
        &self,
        record: &ClientRecord,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let (Some(home), Some(office)) = (record.home_area_sqm, record.office_area_sqm) else {
            return;
        };

        if office > home {
            issues.push(ValidationIssue::critical(
                "office_area_sqm",
                format!("office area {office} sqm exceeds home area {home} sqm"),
            ));
            return;
        }

        if home > Decimal::ZERO && office / home > self.office_share_scrutiny_threshold {
            issues.push(ValidationIssue::warning(
                "office_area_sqm",
                format!(
                    "office occupies more than {}% of the home; likely to draw scrutiny",
                    self.office_share_scrutiny_threshold * Decimal::ONE_HUNDRED
                ),
            ));
        }
    }

    /// Strategy questionnaire and supporting documents completeness.
    fn check_strategy_documents(
        &self,
        record: &ClientRecord,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if !record.strategy_questionnaire_complete {
            issues.push(ValidationIssue::critical(
                "strategy_questionnaire",
                "strategy questionnaire has not been completed",
            ));
        }
        if record.supporting_document_count == 0 {
            issues.push(ValidationIssue::warning(
                "supporting_documents",
                "no supporting documents have been uploaded",
            ));
        }
    }
}

/// Highest severity present in an issue list, if any.
pub fn highest_severity(issues: &[ValidationIssue]) -> Option<Severity> {
    issues.iter().map(|issue| issue.severity).max()
}
