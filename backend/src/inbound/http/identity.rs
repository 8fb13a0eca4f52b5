//! Acting-customer resolution.
//!
//! Every route except account creation names the acting customer through the
//! `cpf` request header. Presenting a tax id is sufficient to act as that
//! customer; swapping this extractor for a credential lookup is the only
//! change a real deployment would need at the HTTP edge.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};
use serde_json::json;

use crate::domain::{Error, TaxId};

/// Header naming the acting customer.
pub const CUSTOMER_HEADER: &str = "cpf";

/// Tax id of the customer a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTaxId(TaxId);

impl CustomerTaxId {
    /// Borrow the tax id.
    #[must_use]
    pub const fn tax_id(&self) -> &TaxId {
        &self.0
    }

    fn from_headers(req: &HttpRequest) -> Result<Self, Error> {
        let raw = req
            .headers()
            .get(CUSTOMER_HEADER)
            .ok_or_else(|| missing_header_error("header is required"))?
            .to_str()
            .map_err(|_| missing_header_error("header must be visible ASCII"))?;
        TaxId::new(raw)
            .map(Self)
            .map_err(|err| missing_header_error(&err.to_string()))
    }
}

fn missing_header_error(reason: &str) -> Error {
    Error::invalid_request(format!("{CUSTOMER_HEADER} {reason}")).with_details(json!({
        "header": CUSTOMER_HEADER,
        "code": "invalid_customer_header",
    }))
}

impl FromRequest for CustomerTaxId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req))
    }
}
