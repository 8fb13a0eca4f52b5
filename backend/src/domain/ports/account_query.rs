//! Driving port for account reads.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Customer, Error, Operation, TaxId};

/// Domain use-case port for account lookups, balances, and statements.
///
/// Every method fails with a `not_found` error when no account is held under
/// the tax id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Fetch the customer with their full statement.
    async fn account(&self, tax_id: &TaxId) -> Result<Customer, Error>;

    /// Balance folded from the statement.
    async fn balance(&self, tax_id: &TaxId) -> Result<Decimal, Error>;

    /// Statement in insertion order.
    async fn statement(&self, tax_id: &TaxId) -> Result<Vec<Operation>, Error>;

    /// Statement entries created on `date`.
    async fn statement_on(&self, tax_id: &TaxId, date: NaiveDate) -> Result<Vec<Operation>, Error>;
}
