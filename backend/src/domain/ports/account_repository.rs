//! Port for the account store.
//!
//! The [`AccountRepository`] trait owns every customer and their statement.
//! Customers are keyed by [`TaxId`]; each mutating call resolves the customer
//! by tax id and applies the change atomically, so a debit's balance check
//! and its append are never interleaved with another write.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{Customer, CustomerName, Operation, TaxId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account store adapters.
    pub enum AccountRepositoryError {
        /// Another customer already holds the tax id.
        AlreadyExists { tax_id: String } =>
            "account already exists for tax id {tax_id}",
        /// No customer holds the tax id.
        NotFound { tax_id: String } =>
            "no account for tax id {tax_id}",
        /// A debit exceeds the balance folded from the existing statement.
        InsufficientFunds { balance: Decimal, requested: Decimal } =>
            "insufficient funds: balance {balance}, requested {requested}",
        /// A credit would overflow the balance.
        BalanceOverflow { balance: Decimal, amount: Decimal } =>
            "balance overflow: balance {balance}, credit {amount}",
        /// The store cannot serve requests.
        Unavailable { message: String } =>
            "account store unavailable: {message}",
    }
}

/// Port for customer storage and statement mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new customer.
    ///
    /// Fails with [`AccountRepositoryError::AlreadyExists`] when the tax id is
    /// taken; the existing record is left untouched.
    async fn insert(&self, customer: Customer) -> Result<(), AccountRepositoryError>;

    /// Look a customer up by tax id.
    async fn find_by_tax_id(
        &self,
        tax_id: &TaxId,
    ) -> Result<Option<Customer>, AccountRepositoryError>;

    /// Replace the customer's name in place.
    async fn rename(&self, tax_id: &TaxId, name: CustomerName)
    -> Result<(), AccountRepositoryError>;

    /// Append an operation to the customer's statement.
    ///
    /// Debits that exceed the current balance fail with
    /// [`AccountRepositoryError::InsufficientFunds`] and credits that would
    /// overflow the balance with [`AccountRepositoryError::BalanceOverflow`];
    /// both leave the statement unchanged.
    async fn append_operation(
        &self,
        tax_id: &TaxId,
        operation: Operation,
    ) -> Result<(), AccountRepositoryError>;

    /// Remove the customer holding exactly this tax id, returning it.
    async fn remove(&self, tax_id: &TaxId) -> Result<Customer, AccountRepositoryError>;
}
