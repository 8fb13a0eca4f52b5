//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod accounts;
pub mod accounts_dto;
pub mod error;
pub mod health;
pub mod identity;
pub mod schemas;
pub mod state;
pub mod statement;
pub mod validation;

pub use error::ApiResult;

/// Register the account and statement routes together with the extractor
/// configuration that maps payload errors onto the API error envelope.
///
/// The caller provides [`state::HttpState`] as `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(accounts::create_account)
        .service(accounts::get_account)
        .service(accounts::update_account)
        .service(accounts::delete_account)
        .service(accounts::deposit)
        .service(accounts::withdraw)
        .service(accounts::balance)
        .service(statement::statement_by_date)
        .service(statement::statement_resource());
}
