//! Request and response payloads for the account endpoints.
//!
//! Amounts travel as JSON numbers and are parsed straight into [`Decimal`]
//! so no binary floating point value sits between the wire and the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Customer, Operation};

/// Request body for `POST /account`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Tax id (CPF) identifying the new customer.
    #[schema(example = "12345678900")]
    pub cpf: Option<String>,
    /// Account holder name.
    #[schema(example = "Alice")]
    pub name: Option<String>,
}

/// Request body for `PUT /account`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// Replacement holder name.
    #[schema(example = "Alice Doe")]
    pub name: Option<String>,
}

/// Request body for `POST /deposit` and `POST /withdraw`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    /// Free-form note stored with the operation.
    #[schema(example = "salary")]
    pub description: Option<String>,
    /// Strictly positive amount.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, example = 100.0)]
    pub amount: Option<Decimal>,
}

/// Query string for `GET /statement/date`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatementDateQuery {
    /// Calendar day formatted as `YYYY-MM-DD`.
    #[param(example = "2026-03-14")]
    pub date: Option<String>,
}

/// Statement entry as returned to clients.
///
/// Keys are camelCase like every other payload here, so the timestamp is
/// `createdAt` rather than the `created_at` key older clients may expect.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
    /// RFC 3339 timestamp of the operation.
    #[schema(example = "2026-03-14T09:26:53+00:00")]
    pub created_at: String,
    /// Either `credit` or `debit`.
    #[serde(rename = "type")]
    #[schema(example = "credit")]
    pub kind: String,
}

impl From<Operation> for OperationResponse {
    fn from(operation: Operation) -> Self {
        Self {
            description: operation.description,
            amount: operation.amount.value(),
            created_at: operation.created_at.to_rfc3339(),
            kind: operation.kind.to_string(),
        }
    }
}

/// Full customer record as returned by `GET /account`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    #[schema(example = "12345678900")]
    pub cpf: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub statement: Vec<OperationResponse>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let cpf = customer.tax_id().to_string();
        let name = customer.name().as_ref().to_owned();
        let id = customer.id().to_string();
        let statement = Vec::<Operation>::from(customer.into_statement())
            .into_iter()
            .map(OperationResponse::from)
            .collect();
        Self {
            cpf,
            name,
            id,
            statement,
        }
    }
}

/// Response body for `GET /balance`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 50.0)]
    pub balance: Decimal,
}

/// Convert a list of domain operations into response entries.
pub fn statement_response(operations: Vec<Operation>) -> Vec<OperationResponse> {
    operations.into_iter().map(OperationResponse::from).collect()
}
