//! Account API handlers.
//!
//! ```text
//! POST   /account   {"cpf":"111","name":"Alice"}
//! GET    /account
//! PUT    /account   {"name":"Alice Doe"}
//! DELETE /account
//! POST   /deposit   {"description":"salary","amount":100}
//! POST   /withdraw  {"amount":50}
//! GET    /balance
//! ```
//!
//! Every route except creation acts on the customer named by the `cpf`
//! header.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts_dto::{
    BalanceResponse, CreateAccountRequest, CustomerResponse, OperationRequest,
    UpdateAccountRequest,
};
use crate::inbound::http::identity::CustomerTaxId;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_amount, parse_name, parse_tax_id};

/// Open an account for a new tax id.
#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account opened"),
        (status = 400, description = "Invalid request or tax id already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "createAccount",
    security([])
)]
#[post("/account")]
pub async fn create_account(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAccountRequest>,
) -> ApiResult<HttpResponse> {
    let CreateAccountRequest { cpf, name } = payload.into_inner();
    let tax_id = parse_tax_id(cpf, "cpf")?;
    let name = parse_name(name, "name")?;
    state.accounts.open_account(tax_id, name).await?;
    Ok(HttpResponse::Created().finish())
}

/// Return the acting customer with their full statement.
#[utoipa::path(
    get,
    path = "/account",
    responses(
        (status = 200, description = "Customer record", body = CustomerResponse),
        (status = 400, description = "Missing cpf header or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "getAccount"
)]
#[get("/account")]
pub async fn get_account(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
) -> ApiResult<web::Json<CustomerResponse>> {
    let found = state.accounts_query.account(customer.tax_id()).await?;
    Ok(web::Json(CustomerResponse::from(found)))
}

/// Rename the acting customer.
#[utoipa::path(
    put,
    path = "/account",
    request_body = UpdateAccountRequest,
    responses(
        (status = 201, description = "Account updated"),
        (status = 400, description = "Invalid request or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "updateAccount"
)]
#[put("/account")]
pub async fn update_account(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
    payload: web::Json<UpdateAccountRequest>,
) -> ApiResult<HttpResponse> {
    let name = parse_name(payload.into_inner().name, "name")?;
    state.accounts.rename(customer.tax_id(), name).await?;
    Ok(HttpResponse::Created().finish())
}

/// Close the acting customer's account.
#[utoipa::path(
    delete,
    path = "/account",
    responses(
        (status = 204, description = "Account closed"),
        (status = 400, description = "Missing cpf header or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "deleteAccount"
)]
#[delete("/account")]
pub async fn delete_account(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
) -> ApiResult<HttpResponse> {
    state.accounts.close_account(customer.tax_id()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Credit the acting customer's account.
#[utoipa::path(
    post,
    path = "/deposit",
    request_body = OperationRequest,
    responses(
        (status = 201, description = "Deposit recorded"),
        (status = 400, description = "Invalid amount or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["operations"],
    operation_id = "deposit"
)]
#[post("/deposit")]
pub async fn deposit(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
    payload: web::Json<OperationRequest>,
) -> ApiResult<HttpResponse> {
    let OperationRequest {
        description,
        amount,
    } = payload.into_inner();
    let amount = parse_amount(amount, "amount")?;
    state
        .accounts
        .deposit(customer.tax_id(), amount, description)
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// Debit the acting customer's account when the balance covers it.
#[utoipa::path(
    post,
    path = "/withdraw",
    request_body = OperationRequest,
    responses(
        (status = 201, description = "Withdrawal recorded"),
        (status = 400, description = "Invalid amount, unknown customer or insufficient funds", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["operations"],
    operation_id = "withdraw"
)]
#[post("/withdraw")]
pub async fn withdraw(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
    payload: web::Json<OperationRequest>,
) -> ApiResult<HttpResponse> {
    let OperationRequest {
        description,
        amount,
    } = payload.into_inner();
    let amount = parse_amount(amount, "amount")?;
    state
        .accounts
        .withdraw(customer.tax_id(), amount, description)
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// Report the acting customer's balance.
#[utoipa::path(
    get,
    path = "/balance",
    responses(
        (status = 200, description = "Current balance", body = BalanceResponse),
        (status = 400, description = "Missing cpf header or unknown customer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["operations"],
    operation_id = "getBalance"
)]
#[get("/balance")]
pub async fn balance(
    state: web::Data<HttpState>,
    customer: CustomerTaxId,
) -> ApiResult<web::Json<BalanceResponse>> {
    let balance = state.accounts_query.balance(customer.tax_id()).await?;
    Ok(web::Json(BalanceResponse { balance }))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
