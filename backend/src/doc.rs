//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every account, statement and health endpoint, the
//! error schema wrappers, and the `cpf` header security scheme. The document
//! backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::accounts_dto::{
    BalanceResponse, CreateAccountRequest, CustomerResponse, OperationRequest, OperationResponse,
    UpdateAccountRequest,
};
use crate::inbound::http::identity::CUSTOMER_HEADER;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the security scheme carrying the acting customer's tax id.
const CUSTOMER_SCHEME: &str = "CustomerTaxId";

/// Enrich the generated document with the `cpf` header security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            CUSTOMER_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                CUSTOMER_HEADER,
                "Tax id (CPF) of the customer the request acts on.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bank account API",
        description = "In-memory bank accounts: opening, deposits, withdrawals, balance and statements."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("CustomerTaxId" = [])),
    paths(
        crate::inbound::http::accounts::create_account,
        crate::inbound::http::accounts::get_account,
        crate::inbound::http::accounts::update_account,
        crate::inbound::http::accounts::delete_account,
        crate::inbound::http::accounts::deposit,
        crate::inbound::http::accounts::withdraw,
        crate::inbound::http::accounts::balance,
        crate::inbound::http::statement::statement,
        crate::inbound::http::statement::statement_by_date,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateAccountRequest,
        UpdateAccountRequest,
        OperationRequest,
        OperationResponse,
        CustomerResponse,
        BalanceResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "accounts", description = "Account lifecycle"),
        (name = "operations", description = "Deposits, withdrawals and balance"),
        (name = "statement", description = "Statement listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
