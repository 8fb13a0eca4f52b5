//! Shared validation helpers for inbound HTTP adapters.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::{AccountValidationError, Amount, CustomerName, Error, TaxId};

/// Machine-readable codes placed in `details.code` of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldErrorCode {
    MissingField,
    InvalidField,
    InvalidDate,
}

impl FieldErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidField => "invalid_field",
            Self::InvalidDate => "invalid_date",
        }
    }
}

fn field_error(field: &str, message: impl Into<String>, code: FieldErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

/// Build the error returned when a required field is absent.
pub fn missing_field_error(field: &str) -> Error {
    field_error(
        field,
        format!("missing required field: {field}"),
        FieldErrorCode::MissingField,
    )
}

fn invalid_field_error(field: &str, err: &AccountValidationError) -> Error {
    field_error(field, err.to_string(), FieldErrorCode::InvalidField)
}

/// Validate a required tax id field.
pub fn parse_tax_id(value: Option<String>, field: &str) -> Result<TaxId, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    TaxId::new(raw).map_err(|err| invalid_field_error(field, &err))
}

/// Validate a required name field.
pub fn parse_name(value: Option<String>, field: &str) -> Result<CustomerName, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    CustomerName::new(raw).map_err(|err| invalid_field_error(field, &err))
}

/// Validate a required, strictly positive amount field.
pub fn parse_amount(value: Option<Decimal>, field: &str) -> Result<Amount, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    Amount::new(raw).map_err(|err| invalid_field_error(field, &err))
}

/// Parse a statement date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; for timestamps only the
/// UTC calendar day is kept.
pub fn parse_date(value: Option<String>, field: &str) -> Result<NaiveDate, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            field_error(
                field,
                format!("{field} must be a date formatted as YYYY-MM-DD"),
                FieldErrorCode::InvalidDate,
            )
        })
}
