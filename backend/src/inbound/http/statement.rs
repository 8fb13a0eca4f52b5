//! Statement API handlers.

use actix_web::{Resource, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts_dto::{OperationResponse, StatementDateQuery, statement_response};
use crate::inbound::http::identity::CustomerTaxId;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_date;

/// List every operation of the acting customer in insertion order.
#[utoipa::path(
    get,
    path = "/statement/",
    responses(
        (status = 200, description = "Statement entries", body = [OperationResponse]),
        (status = 400, description = "Missing cpf header or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["statement"],
    operation_id = "getStatement"
)]
pub async fn statement(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
) -> ApiResult<web::Json<Vec<OperationResponse>>> {
    let operations = state.accounts_query.statement(customer.tax_id()).await?;
    Ok(web::Json(statement_response(operations)))
}

/// Resource serving [`statement`] with and without the trailing slash.
pub fn statement_resource() -> Resource {
    web::resource(["/statement/", "/statement"]).route(web::get().to(statement))
}

/// List the operations created on one calendar day (UTC).
#[utoipa::path(
    get,
    path = "/statement/date",
    params(StatementDateQuery),
    responses(
        (status = 200, description = "Statement entries for the day", body = [OperationResponse]),
        (status = 400, description = "Malformed date, missing cpf header or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["statement"],
    operation_id = "getStatementByDate"
)]
#[get("/statement/date")]
pub async fn statement_by_date(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
    query: web::Query<StatementDateQuery>,
) -> ApiResult<web::Json<Vec<OperationResponse>>> {
    let date = parse_date(query.into_inner().date, "date")?;
    let operations = state
        .accounts_query
        .statement_on(customer.tax_id(), date)
        .await?;
    Ok(web::Json(statement_response(operations)))
}
